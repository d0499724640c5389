use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::ServiceError;
use crate::lenient;

pub const USERS: &str = "users";

/// Keys the server owns; a client cannot smuggle them in through extra fields.
const RESERVED_KEYS: [&str; 4] = ["id", "createdAt", "password", "type"];

/// Signup only accepts `student` and `employer`; any other stored value is
/// kept as written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Student,
    Employer,
    #[serde(untagged)]
    Other(String),
}

impl std::str::FromStr for UserType {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Self::Student),
            "employer" => Ok(Self::Employer),
            _ => Err(ServiceError::Validation("Invalid user type".into())),
        }
    }
}

/// Stored user record. Type-specific profile fields (mobile, companyName, ...)
/// are kept verbatim in `extra`. Records created before `createdAt` existed
/// load without it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub password: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A user as returned to clients: the stored record minus `password`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            name: u.name,
            user_type: u.user_type,
            created_at: u.created_at,
            extra: u.extra,
        }
    }
}

/// Signup payload (`userData` of `POST /auth` with `action: "signup"`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupInput {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub user_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SignupInput {
    pub(crate) fn strip_reserved(&mut self) {
        for key in RESERVED_KEYS {
            self.extra.remove(key);
        }
    }
}

/// Credentials for `POST /auth/login` and `action: "signin"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SigninInput {
    pub email: Option<String>,
    pub password: Option<String>,
}
