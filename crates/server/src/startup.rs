use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::info;

use configs::AppConfig;
use service::{auth::PasswordScheme, runtime};

use crate::{errors::StartupError, routes, state::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Assemble the application router from a validated config.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let scheme: PasswordScheme = cfg
        .auth
        .password_scheme
        .parse()
        .map_err(|e: service::errors::ServiceError| StartupError::InvalidConfig(e.message().to_string()))?;

    let store = runtime::prepare_store(&cfg.storage.data_dir).await?;
    let state = ServerState::new(store, scheme);
    info!(data_dir = %cfg.storage.data_dir, password_scheme = ?scheme, "storage ready");

    Ok(routes::build_router(state, build_cors()))
}

/// Public entry: build the app and run the HTTP server
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let addr = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "starting server crate");
    axum::serve(listener, app).await?;
    Ok(())
}
