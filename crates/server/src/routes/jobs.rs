use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde_json::{json, Value};
use service::jobs::domain::{JobFilter, NewJob};
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/jobs", tag = "jobs",
    params(
        ("q" = Option<String>, Query, description = "Case-insensitive match on title, company or tag"),
        ("location" = Option<String>, Query, description = "Exact location")
    ),
    responses(
        (status = 200, description = "All jobs", body = crate::openapi::JobsEnvelopeDoc),
        (status = 400, description = "Invalid query string", body = crate::openapi::ErrorEnvelopeDoc),
        (status = 500, description = "Failed to fetch jobs", body = crate::openapi::ErrorEnvelopeDoc)
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<JobFilter>, QueryRejection>,
) -> Result<Json<Value>, JsonApiError> {
    let Query(filter) = query.map_err(JsonApiError::invalid_query)?;
    let jobs = state
        .jobs
        .list(&filter)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Failed to fetch jobs"))?;
    info!(count = jobs.len(), "list jobs");
    Ok(Json(json!({"success": true, "jobs": jobs})))
}

#[utoipa::path(
    post, path = "/jobs", tag = "jobs",
    request_body = crate::openapi::NewJobDoc,
    responses(
        (status = 200, description = "Job posted", body = crate::openapi::JobEnvelopeDoc),
        (status = 400, description = "Missing required fields", body = crate::openapi::ErrorEnvelopeDoc),
        (status = 500, description = "Failed to post job", body = crate::openapi::ErrorEnvelopeDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<NewJob>, JsonRejection>,
) -> Result<Json<Value>, JsonApiError> {
    let Json(input) = payload.map_err(JsonApiError::invalid_body)?;
    let job = state
        .jobs
        .create(input)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Failed to post job"))?;
    Ok(Json(json!({"success": true, "message": "Job posted successfully", "job": job})))
}

#[utoipa::path(
    get, path = "/jobs/{id}", tag = "jobs",
    params(("id" = String, Path, description = "Job ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::JobEnvelopeDoc),
        (status = 404, description = "Job not found", body = crate::openapi::ErrorEnvelopeDoc),
        (status = 500, description = "Failed to fetch job", body = crate::openapi::ErrorEnvelopeDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, JsonApiError> {
    let job = state
        .jobs
        .get(&id)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Failed to fetch job"))?;
    Ok(Json(json!({"success": true, "job": job})))
}
