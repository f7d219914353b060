//! Domain types for the import pipeline.

pub mod content;
pub mod job;
pub mod tag;
