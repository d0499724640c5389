use std::sync::Arc;

use service::{
    applications::ApplicationService,
    auth::{AuthService, PasswordScheme},
    jobs::JobService,
    storage::DocumentStore,
};

/// Shared handler state: one service per collection over a single store.
#[derive(Clone)]
pub struct ServerState {
    pub auth: Arc<AuthService>,
    pub jobs: Arc<JobService>,
    pub applications: Arc<ApplicationService>,
}

impl ServerState {
    pub fn new(store: Arc<dyn DocumentStore>, scheme: PasswordScheme) -> Self {
        Self {
            auth: Arc::new(AuthService::new(store.clone(), scheme)),
            jobs: Arc::new(JobService::new(store.clone())),
            applications: Arc::new(ApplicationService::new(store)),
        }
    }
}
