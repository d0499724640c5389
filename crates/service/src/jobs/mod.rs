pub mod domain;
pub mod service;

pub use service::JobService;
