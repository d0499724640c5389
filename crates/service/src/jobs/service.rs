use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::{Job, JobFilter, NewJob, JOBS};
use crate::errors::ServiceError;
use crate::storage::{Collection, DocumentStore};
use crate::validate::present;

/// Job postings over the `jobs` collection.
pub struct JobService {
    jobs: Collection<Job>,
}

impl JobService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { jobs: Collection::new(JOBS, store) }
    }

    /// All jobs in posting order, narrowed by `filter`.
    pub async fn list(&self, filter: &JobFilter) -> Result<Vec<Job>, ServiceError> {
        if filter.is_empty() {
            return self.jobs.load().await;
        }
        self.jobs.filter(|j| filter.matches(j)).await
    }

    pub async fn get(&self, id: &str) -> Result<Job, ServiceError> {
        self.jobs
            .find(|j| j.id == id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Job"))
    }

    #[instrument(skip(self, input), fields(title = ?input.title, company = ?input.company))]
    pub async fn create(&self, mut input: NewJob) -> Result<Job, ServiceError> {
        let (title, company, location) = match (present(&input.title), present(&input.company), present(&input.location)) {
            (Some(t), Some(c), Some(l)) => (t.to_string(), c.to_string(), l.to_string()),
            _ => return Err(ServiceError::missing_fields()),
        };
        input.strip_reserved();

        let job = self
            .jobs
            .insert_with(
                |_| Ok(()),
                || Job {
                    id: Uuid::new_v4().to_string(),
                    title,
                    company,
                    location,
                    tags: input.tags,
                    description: input.description.unwrap_or_default(),
                    requirements: input.requirements,
                    responsibilities: input.responsibilities,
                    posted_at: Some(Utc::now()),
                    extra: input.extra,
                },
            )
            .await?;

        info!(job_id = %job.id, company = %job.company, "job_posted");
        Ok(job)
    }
}
