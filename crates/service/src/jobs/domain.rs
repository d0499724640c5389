use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::lenient;

pub const JOBS: &str = "jobs";

const RESERVED_KEYS: [&str; 2] = ["id", "postedAt"];

/// Stored job posting. Fields the board does not model (salary, type, ...)
/// stay in `extra` and are returned as posted. Modelled fields read leniently
/// so hand-edited records still load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub requirements: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub responsibilities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `POST /jobs`. Only `title`, `company` and `location` are required;
/// list fields accept `null` or a single value.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub requirements: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub responsibilities: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewJob {
    pub(crate) fn strip_reserved(&mut self) {
        for key in RESERVED_KEYS {
            self.extra.remove(key);
        }
    }
}

/// Optional narrowing for `GET /jobs`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct JobFilter {
    /// Case-insensitive substring over title, company and tags.
    pub q: Option<String>,
    /// Exact location match.
    pub location: Option<String>,
}

impl JobFilter {
    pub fn is_empty(&self) -> bool {
        self.q.as_deref().map_or(true, str::is_empty) && self.location.as_deref().map_or(true, str::is_empty)
    }

    pub fn matches(&self, job: &Job) -> bool {
        let matches_search = match self.q.as_deref().filter(|q| !q.is_empty()) {
            Some(q) => {
                let q = q.to_lowercase();
                job.title.to_lowercase().contains(&q)
                    || job.company.to_lowercase().contains(&q)
                    || job.tags.iter().any(|t| t.to_lowercase().contains(&q))
            }
            None => true,
        };
        let matches_location = match self.location.as_deref().filter(|l| !l.is_empty()) {
            Some(l) => job.location == l,
            None => true,
        };
        matches_search && matches_location
    }
}
