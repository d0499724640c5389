//! Service layer for the job board.
//! - `storage`: whole-document JSON persistence and typed collection access.
//! - `auth`, `jobs`, `applications`: validation, conflict checks and record
//!   construction on top of one collection each.

pub mod errors;
pub mod storage;
pub mod auth;
pub mod jobs;
pub mod applications;
pub mod runtime;
mod lenient;
mod validate;
