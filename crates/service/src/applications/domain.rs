use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validate::present;

pub const APPLICATIONS: &str = "applications";

/// Applicant id used when the form carries no `userId`.
pub const ANONYMOUS_USER: &str = "anonymous";
/// Resume uploads are not stored; every application points here.
pub const PLACEHOLDER_RESUME_URL: &str = "placeholder-resume-url.pdf";
pub const STATUS_PENDING: &str = "pending";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub job_id: String,
    pub user_id: String,
    pub cover_letter: String,
    pub phone: String,
    pub resume_url: String,
    pub status: String,
    pub applied_at: DateTime<Utc>,
}

/// Fields of the `POST /applications` form.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    pub job_id: Option<String>,
    pub user_id: Option<String>,
    pub cover_letter: Option<String>,
    pub phone: Option<String>,
}

/// Optional narrowing for `GET /applications`: a student's own applications
/// (`user_id`) or the applications to one job (`job_id`).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationFilter {
    pub job_id: Option<String>,
    pub user_id: Option<String>,
}

impl ApplicationFilter {
    pub fn matches(&self, app: &Application) -> bool {
        present(&self.job_id).map_or(true, |j| app.job_id == j)
            && present(&self.user_id).map_or(true, |u| app.user_id == u)
    }
}
