//! Storage traits for jobs, tags, and article-tag links.
//!
//! The storage engine is an external collaborator; these traits are the
//! seam the pipeline talks through. Split into focused traits:
//! - `JobStore`: durable job-progress records
//! - `TagStore`: tag catalog and article-tag link table
//! - `ImportStore`: composite trait combining both

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{
    job::ImportJob,
    tag::{ArticleTag, Tag},
};

/// Durable store for import job progress records.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Insert a freshly created job. Fails on a duplicate id.
    async fn insert_job(&self, job: &ImportJob) -> Result<()>;

    /// Get a job by id.
    async fn get_job(&self, id: &str) -> Result<Option<ImportJob>>;

    /// Atomically read-modify-write a job record.
    ///
    /// The closure runs exactly once against the current record, and the
    /// modified record is written back in the same atomic step — interleaved
    /// callers must never lose an update. Returns the updated record, or
    /// `None` when the job does not exist.
    async fn modify_job(
        &self,
        id: &str,
        apply: &(dyn for<'a> Fn(&'a mut ImportJob) + Send + Sync),
    ) -> Result<Option<ImportJob>>;
}

/// Store for the shared tag catalog and the article-tag link table.
#[async_trait]
pub trait TagStore: Send + Sync {
    /// Look up existing tags whose name is in `names` (one batched lookup).
    async fn find_tags_by_names(&self, names: &[String]) -> Result<Vec<Tag>>;

    /// Insert new tags, all-or-nothing.
    ///
    /// Must enforce name uniqueness: when any name already exists the call
    /// inserts nothing and fails with a duplicate-tag error. This is what
    /// keeps the merger's lookup-then-create sequence free of duplicate
    /// rows under concurrent writers.
    async fn insert_tags(&self, tags: &[Tag]) -> Result<()>;

    /// Insert article-tag link rows, all-or-nothing.
    async fn insert_article_tags(&self, links: &[ArticleTag]) -> Result<()>;
}

/// Composite storage trait combining job and tag storage.
///
/// This is the trait the `Importer` facade requires.
pub trait ImportStore: JobStore + TagStore {}

// Blanket implementation: anything implementing both is an ImportStore
impl<T: JobStore + TagStore> ImportStore for T {}
