#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::Service;

use server::{routes, ServerState};
use service::auth::PasswordScheme;
use service::errors::ServiceError;
use service::storage::{DocumentStore, MemoryStore};

pub const BOUNDARY: &str = "----jobboard-test-boundary";

fn cors() -> tower_http::cors::CorsLayer {
    tower_http::cors::CorsLayer::very_permissive()
}

pub fn app_with_store(store: Arc<dyn DocumentStore>) -> Router {
    routes::build_router(ServerState::new(store, PasswordScheme::Plaintext), cors())
}

pub fn build_app() -> (Arc<MemoryStore>, Router) {
    let store = Arc::new(MemoryStore::new());
    (store.clone(), app_with_store(store))
}

/// A store whose every read and write fails, for the 500 paths.
pub struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    async fn read(&self, collection: &str, _default_shape: &Value) -> Result<Value, ServiceError> {
        Err(ServiceError::Storage(format!("{collection}: disk unavailable")))
    }

    async fn write(&self, collection: &str, _document: &Value) -> Result<(), ServiceError> {
        Err(ServiceError::Storage(format!("{collection}: disk unavailable")))
    }
}

pub async fn send(app: &Router, req: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let resp = app.clone().call(req).await?;
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, body))
}

pub async fn get(app: &Router, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
    send(app, Request::builder().method("GET").uri(uri).body(Body::empty())?).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> anyhow::Result<(StatusCode, Value)> {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body)?))?;
    send(app, req).await
}

/// Encode text fields as `multipart/form-data`; a `resume` part is added as a file.
pub fn multipart_body(fields: &[(&str, &str)], with_resume: bool) -> Vec<u8> {
    let mut out = String::new();
    for (name, value) in fields {
        out.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    if with_resume {
        out.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"resume\"; filename=\"cv.pdf\"\r\nContent-Type: application/pdf\r\n\r\n%PDF-1.4 fake\r\n"
        ));
    }
    out.push_str(&format!("--{BOUNDARY}--\r\n"));
    out.into_bytes()
}

pub async fn post_form(
    app: &Router,
    uri: &str,
    fields: &[(&str, &str)],
    with_resume: bool,
) -> anyhow::Result<(StatusCode, Value)> {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", format!("multipart/form-data; boundary={BOUNDARY}"))
        .body(Body::from(multipart_body(fields, with_resume)))?;
    send(app, req).await
}
