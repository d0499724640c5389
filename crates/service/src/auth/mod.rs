//! Auth module: domain types, password schemes, and the signup/signin service.
//!
//! Credentials live in the `users` collection next to the profile fields.

pub mod domain;
pub mod password;
pub mod service;

pub use password::PasswordScheme;
pub use service::AuthService;
