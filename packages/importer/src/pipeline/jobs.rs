//! Job tracking - durable progress records for bulk imports.
//!
//! Outcome reporting is decoupled from per-item processing, so one
//! article's extraction or tagging failure never blocks progress
//! accounting for the rest, and a UI can poll the record mid-run.
//! Every mutation goes through the store's atomic read-modify-write
//! primitive; interleaved reporters never lose an increment.

use chrono::Utc;
use tracing::{debug, info};

use crate::error::Result;
use crate::traits::store::JobStore;
use crate::types::job::{ImportJob, ImportOutcome, JobPatch, JobStatus};

/// Create a job record sized to the batch.
pub async fn create_job<S: JobStore>(store: &S, total_count: u32) -> Result<ImportJob> {
    let job = ImportJob::new(total_count);
    store.insert_job(&job).await?;
    info!(job_id = %job.id, total_count, "created import job");
    Ok(job)
}

/// Record one per-item outcome against a job.
///
/// A missing job is a silent no-op: the job may have been deleted by
/// another actor while items were still in flight, and the reporter
/// cannot prevent that race.
pub async fn record_outcome<S: JobStore>(
    store: &S,
    job_id: &str,
    outcome: ImportOutcome,
) -> Result<()> {
    let updated = store
        .modify_job(job_id, &move |job: &mut ImportJob| job.record(outcome))
        .await?;
    if updated.is_none() {
        debug!(job_id = %job_id, "outcome reported for missing job, ignoring");
    }
    Ok(())
}

/// Apply a partial update to a job.
///
/// Used internally by `complete_job` and exposed for driver-level
/// corrections (e.g. adjusting `total_count` mid-run). Returns `None`
/// when the job does not exist.
pub async fn update_job<S: JobStore>(
    store: &S,
    job_id: &str,
    patch: JobPatch,
) -> Result<Option<ImportJob>> {
    store
        .modify_job(job_id, &move |job: &mut ImportJob| patch.apply(job))
        .await
}

/// Mark a job completed and stamp `completed_at`.
///
/// Counters are not validated against the total; premature or delayed
/// completion calls are the driver's responsibility. Returns `None`
/// when the job does not exist.
pub async fn complete_job<S: JobStore>(store: &S, job_id: &str) -> Result<Option<ImportJob>> {
    let patch = JobPatch::new()
        .with_status(JobStatus::Completed)
        .with_completed_at(Utc::now());
    let completed = update_job(store, job_id, patch).await?;
    if let Some(job) = &completed {
        info!(
            job_id = %job.id,
            completed = job.completed_count,
            failed = job.failed_count,
            "import job completed"
        );
    }
    Ok(completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::MemoryStore;
    use futures::future::join_all;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_create_job_starts_pending() {
        let store = MemoryStore::new();
        let job = create_job(&store, 10).await.unwrap();

        assert_eq!(job.status, JobStatus::Pending);
        assert_eq!(job.total_count, 10);
        assert_eq!(job.processed_count(), 0);

        let stored = store.get_job(&job.id).await.unwrap().unwrap();
        assert_eq!(stored, job);
    }

    #[tokio::test]
    async fn test_record_outcome_splits_counters() {
        let store = MemoryStore::new();
        let job = create_job(&store, 3).await.unwrap();

        record_outcome(&store, &job.id, ImportOutcome::Success)
            .await
            .unwrap();
        record_outcome(&store, &job.id, ImportOutcome::Failed)
            .await
            .unwrap();
        record_outcome(&store, &job.id, ImportOutcome::Success)
            .await
            .unwrap();

        let job = store.get_job(&job.id).await.unwrap().unwrap();
        assert_eq!(job.completed_count, 2);
        assert_eq!(job.failed_count, 1);
        assert_eq!(job.status, JobStatus::InProgress);
    }

    #[tokio::test]
    async fn test_record_outcome_for_missing_job_is_noop() {
        let store = MemoryStore::new();
        record_outcome(&store, "gone", ImportOutcome::Success)
            .await
            .unwrap();
        assert_eq!(store.job_count(), 0);
    }

    #[tokio::test]
    async fn test_complete_job_stamps_timestamp() {
        let store = MemoryStore::new();
        let job = create_job(&store, 1).await.unwrap();

        let completed = complete_job(&store, &job.id).await.unwrap().unwrap();
        assert_eq!(completed.status, JobStatus::Completed);
        assert!(completed.completed_at.is_some());

        assert!(complete_job(&store, "gone").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_job_adjusts_total() {
        let store = MemoryStore::new();
        let job = create_job(&store, 5).await.unwrap();

        let updated = update_job(&store, &job.id, JobPatch::new().with_total_count(7))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.total_count, 7);
        assert_eq!(updated.status, JobStatus::Pending);
    }

    #[tokio::test]
    async fn test_update_cannot_regress_status() {
        let store = MemoryStore::new();
        let job = create_job(&store, 1).await.unwrap();
        complete_job(&store, &job.id).await.unwrap();

        let updated = update_job(&store, &job.id, JobPatch::new().with_status(JobStatus::Pending))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, JobStatus::Completed);
    }

    #[tokio::test]
    async fn test_concurrent_outcomes_never_lose_increments() {
        let store = Arc::new(MemoryStore::new());
        let job = create_job(store.as_ref(), 10).await.unwrap();

        let mut handles = Vec::new();
        for i in 0..10 {
            let store = store.clone();
            let job_id = job.id.clone();
            let outcome = if i < 7 {
                ImportOutcome::Success
            } else {
                ImportOutcome::Failed
            };
            handles.push(tokio::spawn(async move {
                record_outcome(store.as_ref(), &job_id, outcome).await
            }));
        }
        for result in join_all(handles).await {
            result.unwrap().unwrap();
        }

        let job = store.get_job(&job.id).await.unwrap().unwrap();
        assert_eq!(job.completed_count, 7);
        assert_eq!(job.failed_count, 3);
        assert_eq!(job.status, JobStatus::InProgress);

        let completed = complete_job(store.as_ref(), &job.id).await.unwrap().unwrap();
        assert_eq!(completed.status, JobStatus::Completed);
        assert!(completed.completed_at.is_some());
    }
}
