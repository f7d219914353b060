//! Article Import Pipeline
//!
//! Bulk-ingestion core for a personal article-archiving client. Three
//! components compose per imported item:
//!
//! - **Content extraction** - untrusted raw HTML becomes sanitized
//!   readable content, with a full-body fallback so a heuristic miss
//!   never drops an article ([`extract`]).
//! - **Tag merging** - free-text tag names resolve into a deduplicated
//!   tag catalog plus article links, safe under concurrent writers
//!   ([`merge_tags`]).
//! - **Job tracking** - a durable progress record absorbs concurrent
//!   per-item outcome reports without losing increments
//!   ([`record_outcome`]).
//!
//! The import driver (external) creates a job sized to the batch,
//! processes items independently, and reports outcomes as they land -
//! out of order and concurrently. Storage is an external collaborator
//! reached through the [`traits::store`] seams.
//!
//! # Modules
//!
//! - [`traits`] - Storage trait seams (JobStore, TagStore)
//! - [`types`] - Domain types (ImportJob, Tag, ParsedContent, ...)
//! - [`pipeline`] - The three components plus the [`Importer`] facade
//! - [`stores`] - Storage implementations (MemoryStore)

pub mod error;
pub mod pipeline;
pub mod stores;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{ImportError, Result};
pub use pipeline::{
    complete_job, create_job, extract, merge_tags, record_outcome, sanitize_html, update_job,
    Importer,
};
pub use stores::MemoryStore;
pub use traits::store::{ImportStore, JobStore, TagStore};
pub use types::{
    content::{ParseStatus, ParsedContent},
    job::{ImportJob, ImportOutcome, JobPatch, JobStatus},
    tag::{ArticleTag, Tag},
};
