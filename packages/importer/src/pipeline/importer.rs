//! The Importer - main entry point for the import pipeline.

use crate::error::Result;
use crate::pipeline::{extract, jobs, tags};
use crate::traits::store::ImportStore;
use crate::types::{
    content::ParsedContent,
    job::{ImportJob, ImportOutcome, JobPatch},
    tag::ArticleTag,
};

/// One facade over the three pipeline components, bound to a storage
/// backend. This is the surface the import driver and UI consume.
///
/// # Example
///
/// ```rust,ignore
/// let importer = Importer::new(MemoryStore::new());
///
/// let job = importer.create_job(items.len() as u32).await?;
/// for item in items {
///     let content = importer.extract(&item.raw_html);
///     // ...persist the article (driver concern)...
///     importer.merge_tags(&article_id, &item.tags).await?;
///     importer.record_outcome(&job.id, ImportOutcome::Success).await?;
/// }
/// importer.complete_job(&job.id).await?;
/// ```
pub struct Importer<S: ImportStore> {
    store: S,
}

impl<S: ImportStore> Importer<S> {
    /// Create a new importer over a storage backend.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Extract sanitized readable content from raw article HTML.
    ///
    /// Pure computation; never fails and never touches storage.
    pub fn extract(&self, raw_html: &str) -> ParsedContent {
        extract::extract(raw_html)
    }

    /// Create a job record sized to the batch.
    pub async fn create_job(&self, total_count: u32) -> Result<ImportJob> {
        jobs::create_job(&self.store, total_count).await
    }

    /// Record one per-item outcome against a job.
    pub async fn record_outcome(&self, job_id: &str, outcome: ImportOutcome) -> Result<()> {
        jobs::record_outcome(&self.store, job_id, outcome).await
    }

    /// Mark a job completed. Returns `None` when the job does not exist.
    pub async fn complete_job(&self, job_id: &str) -> Result<Option<ImportJob>> {
        jobs::complete_job(&self.store, job_id).await
    }

    /// Apply a partial update to a job. Returns `None` when the job does
    /// not exist.
    pub async fn update_job(&self, job_id: &str, patch: JobPatch) -> Result<Option<ImportJob>> {
        jobs::update_job(&self.store, job_id, patch).await
    }

    /// Merge free-text tag names into the catalog and link them to an
    /// article.
    pub async fn merge_tags(&self, article_id: &str, names: &[String]) -> Result<Vec<ArticleTag>> {
        tags::merge_tags(&self.store, article_id, names).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::MemoryStore;
    use crate::types::content::ParseStatus;

    #[tokio::test]
    async fn test_facade_wires_all_components() {
        let importer = Importer::new(MemoryStore::new());

        let content = importer.extract("<article><p>Hello</p></article>");
        assert_eq!(content.parse_status, ParseStatus::Success);

        let job = importer.create_job(1).await.unwrap();
        importer
            .merge_tags("article-1", &["news".to_string()])
            .await
            .unwrap();
        importer
            .record_outcome(&job.id, ImportOutcome::Success)
            .await
            .unwrap();
        let job = importer.complete_job(&job.id).await.unwrap().unwrap();

        assert_eq!(job.completed_count, 1);
        assert_eq!(importer.store().tag_count(), 1);
    }
}
