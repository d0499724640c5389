use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::{
    Application, ApplicationFilter, NewApplication, ANONYMOUS_USER, APPLICATIONS, PLACEHOLDER_RESUME_URL,
    STATUS_PENDING,
};
use crate::errors::ServiceError;
use crate::storage::{Collection, DocumentStore};
use crate::validate::present;

/// Job applications over the `applications` collection.
///
/// `jobId` is not checked against the jobs collection.
pub struct ApplicationService {
    applications: Collection<Application>,
}

impl ApplicationService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { applications: Collection::new(APPLICATIONS, store) }
    }

    /// Record an application; one per (jobId, userId).
    #[instrument(skip(self, input), fields(job_id = ?input.job_id, user_id = ?input.user_id))]
    pub async fn submit(&self, input: NewApplication) -> Result<Application, ServiceError> {
        let (job_id, cover_letter, phone) =
            match (present(&input.job_id), present(&input.cover_letter), present(&input.phone)) {
                (Some(j), Some(c), Some(p)) => (j.to_string(), c.to_string(), p.to_string()),
                _ => return Err(ServiceError::missing_fields()),
            };
        let user_id = present(&input.user_id).unwrap_or(ANONYMOUS_USER).to_string();

        let application = self
            .applications
            .insert_with(
                |existing| {
                    if existing.iter().any(|a| a.job_id == job_id && a.user_id == user_id) {
                        return Err(ServiceError::Conflict("You have already applied to this job".into()));
                    }
                    Ok(())
                },
                || Application {
                    id: Uuid::new_v4().to_string(),
                    job_id: job_id.clone(),
                    user_id: user_id.clone(),
                    cover_letter,
                    phone,
                    resume_url: PLACEHOLDER_RESUME_URL.to_string(),
                    status: STATUS_PENDING.to_string(),
                    applied_at: Utc::now(),
                },
            )
            .await?;

        info!(application_id = %application.id, job_id = %application.job_id, user_id = %application.user_id, "application_submitted");
        Ok(application)
    }

    pub async fn list(&self, filter: &ApplicationFilter) -> Result<Vec<Application>, ServiceError> {
        self.applications.filter(|a| filter.matches(a)).await
    }
}
