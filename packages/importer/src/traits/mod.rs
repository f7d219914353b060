//! Core trait abstractions for the import pipeline.

pub mod store;

pub use store::{ImportStore, JobStore, TagStore};
