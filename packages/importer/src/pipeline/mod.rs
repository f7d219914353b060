//! Import pipeline - the core of the library.
//!
//! Three components compose linearly per imported item:
//! - Content extraction (raw HTML → sanitized readable content)
//! - Tag merging (free-text names → deduplicated catalog rows + links)
//! - Job tracking (durable, concurrency-safe progress counters)
//!
//! Extraction is pure; the other two components go through the storage
//! trait seams and are safe under concurrent invocation.

pub mod extract;
pub mod importer;
pub mod jobs;
pub mod sanitize;
pub mod tags;

pub use extract::extract;
pub use importer::Importer;
pub use jobs::{complete_job, create_job, record_outcome, update_job};
pub use sanitize::sanitize_html;
pub use tags::merge_tags;
