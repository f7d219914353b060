//! Import job types - durable progress tracking for bulk imports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of an import job.
///
/// Moves only forward: pending → in_progress → completed. The variant
/// order carries the direction, so `Ord` answers "is this a forward
/// move".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Created, no outcome recorded yet
    Pending,

    /// At least one outcome recorded
    InProgress,

    /// Explicitly finalized by the driver; terminal
    Completed,
}

/// Per-item processing result reported to the job tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportOutcome {
    Success,
    Failed,
}

/// Durable progress record for one bulk-import run.
///
/// Created once per batch, mutated by every per-item outcome report,
/// finalized by an explicit completion call. Counters only grow, and
/// `completed_count + failed_count` never exceeds `total_count` as long
/// as the driver reports each item once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportJob {
    /// Opaque unique identifier
    pub id: String,

    /// Lifecycle state
    pub status: JobStatus,

    /// Number of items in the batch, fixed at creation
    pub total_count: u32,

    /// Items that imported successfully
    pub completed_count: u32,

    /// Items that failed to import
    pub failed_count: u32,

    /// When the job was created
    pub started_at: DateTime<Utc>,

    /// When the job was explicitly completed
    pub completed_at: Option<DateTime<Utc>>,
}

impl ImportJob {
    /// Create a fresh job sized to a batch.
    pub fn new(total_count: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            status: JobStatus::Pending,
            total_count,
            completed_count: 0,
            failed_count: 0,
            started_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Items accounted for so far, success or failure.
    pub fn processed_count(&self) -> u32 {
        self.completed_count + self.failed_count
    }

    /// Fold one per-item outcome into the counters.
    ///
    /// The first recorded outcome advances a pending job to in-progress.
    pub fn record(&mut self, outcome: ImportOutcome) {
        match outcome {
            ImportOutcome::Success => self.completed_count += 1,
            ImportOutcome::Failed => self.failed_count += 1,
        }
        if self.status == JobStatus::Pending {
            self.status = JobStatus::InProgress;
        }
    }
}

/// Partial update for a job record.
///
/// Unset fields are left untouched. Used by the tracker's completion
/// path and exposed for driver-level corrections (e.g. adjusting
/// `total_count` when the batch size estimate changes mid-run).
#[derive(Debug, Clone, Default)]
pub struct JobPatch {
    pub status: Option<JobStatus>,
    pub total_count: Option<u32>,
    pub completed_count: Option<u32>,
    pub failed_count: Option<u32>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl JobPatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status.
    pub fn with_status(mut self, status: JobStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the total count.
    pub fn with_total_count(mut self, total_count: u32) -> Self {
        self.total_count = Some(total_count);
        self
    }

    /// Set the completed count.
    pub fn with_completed_count(mut self, completed_count: u32) -> Self {
        self.completed_count = Some(completed_count);
        self
    }

    /// Set the failed count.
    pub fn with_failed_count(mut self, failed_count: u32) -> Self {
        self.failed_count = Some(failed_count);
        self
    }

    /// Set the completion timestamp.
    pub fn with_completed_at(mut self, completed_at: DateTime<Utc>) -> Self {
        self.completed_at = Some(completed_at);
        self
    }

    /// Apply the patch to a job record.
    ///
    /// Status changes only ever move forward; a patch carrying an earlier
    /// status than the record already holds leaves the status alone.
    pub fn apply(&self, job: &mut ImportJob) {
        if let Some(status) = self.status {
            if status > job.status {
                job.status = status;
            }
        }
        if let Some(total_count) = self.total_count {
            job.total_count = total_count;
        }
        if let Some(completed_count) = self.completed_count {
            job.completed_count = completed_count;
        }
        if let Some(failed_count) = self.failed_count {
            job.failed_count = failed_count;
        }
        if let Some(completed_at) = self.completed_at {
            job.completed_at = Some(completed_at);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_job_starts_pending() {
        let job = ImportJob::new(12);
        assert_eq!(job.status, JobStatus::Pending);
        assert_eq!(job.total_count, 12);
        assert_eq!(job.completed_count, 0);
        assert_eq!(job.failed_count, 0);
        assert!(job.completed_at.is_none());
        assert!(!job.id.is_empty());
    }

    #[test]
    fn test_record_advances_pending_to_in_progress() {
        let mut job = ImportJob::new(3);
        job.record(ImportOutcome::Success);
        assert_eq!(job.status, JobStatus::InProgress);
        assert_eq!(job.completed_count, 1);

        job.record(ImportOutcome::Failed);
        assert_eq!(job.status, JobStatus::InProgress);
        assert_eq!(job.failed_count, 1);
        assert_eq!(job.processed_count(), 2);
    }

    #[test]
    fn test_status_order_matches_lifecycle() {
        assert!(JobStatus::Pending < JobStatus::InProgress);
        assert!(JobStatus::InProgress < JobStatus::Completed);
    }

    #[test]
    fn test_patch_never_regresses_status() {
        let mut job = ImportJob::new(1);
        job.status = JobStatus::Completed;

        JobPatch::new()
            .with_status(JobStatus::Pending)
            .apply(&mut job);
        assert_eq!(job.status, JobStatus::Completed);

        let mut job = ImportJob::new(1);
        JobPatch::new()
            .with_status(JobStatus::InProgress)
            .apply(&mut job);
        assert_eq!(job.status, JobStatus::InProgress);
    }

    #[test]
    fn test_patch_applies_only_set_fields() {
        let mut job = ImportJob::new(5);
        job.completed_count = 2;

        JobPatch::new().with_total_count(8).apply(&mut job);
        assert_eq!(job.total_count, 8);
        assert_eq!(job.completed_count, 2);
        assert_eq!(job.status, JobStatus::Pending);
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&JobStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(
            serde_json::to_string(&ImportOutcome::Failed).unwrap(),
            "\"failed\""
        );
    }
}
