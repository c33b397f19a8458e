// Job Repository Port (Interface)

use crate::domain::{Job, JobDetail, JobFilter, JobId, JobPatch, NewJob};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for Job persistence
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Insert a new job; the store assigns the id
    async fn create(&self, input: NewJob) -> Result<Job>;

    /// Snapshot of jobs matching the optional filter, ordered by title ascending
    async fn find_all(&self, filter: &JobFilter) -> Result<Vec<Job>>;

    /// Fetch a single job by id, enriched with its Company
    async fn get(&self, id: JobId) -> Result<JobDetail>;

    /// Apply a partial update scoped to id; returns the post-update row
    async fn update(&self, id: JobId, patch: JobPatch) -> Result<Job>;

    /// Delete by id; success is the absence of failure
    async fn remove(&self, id: JobId) -> Result<()>;
}
