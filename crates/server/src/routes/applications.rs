use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::QueryRejection,
        Multipart, Query, State,
    },
    Json,
};
use serde_json::{json, Value};
use service::applications::domain::{ApplicationFilter, NewApplication};
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

/// Collect the known form fields; the `resume` file part is skipped.
async fn read_form(multipart: &mut Multipart) -> Result<NewApplication, MultipartError> {
    let mut input = NewApplication::default();
    while let Some(field) = multipart.next_field().await? {
        let slot = match field.name() {
            Some("jobId") => &mut input.job_id,
            Some("userId") => &mut input.user_id,
            Some("cover-letter") | Some("coverLetter") => &mut input.cover_letter,
            Some("phone") => &mut input.phone,
            _ => continue,
        };
        *slot = Some(field.text().await?);
    }
    Ok(input)
}

#[utoipa::path(
    post, path = "/applications", tag = "applications",
    request_body(content = crate::openapi::ApplicationFormDoc, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Application submitted", body = crate::openapi::ApplicationEnvelopeDoc),
        (status = 400, description = "Missing required fields or already applied", body = crate::openapi::ErrorEnvelopeDoc),
        (status = 500, description = "Failed to submit application", body = crate::openapi::ErrorEnvelopeDoc)
    )
)]
pub async fn submit(
    State(state): State<ServerState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Value>, JsonApiError> {
    let mut multipart = multipart.map_err(JsonApiError::invalid_body)?;
    let input = read_form(&mut multipart).await.map_err(JsonApiError::invalid_body)?;
    let application = state
        .applications
        .submit(input)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Failed to submit application"))?;
    Ok(Json(json!({
        "success": true,
        "message": "Application submitted successfully",
        "application": application,
    })))
}

#[utoipa::path(
    get, path = "/applications", tag = "applications",
    params(
        ("jobId" = Option<String>, Query, description = "Only applications to this job"),
        ("userId" = Option<String>, Query, description = "Only applications by this user")
    ),
    responses(
        (status = 200, description = "Applications", body = crate::openapi::ApplicationsEnvelopeDoc),
        (status = 400, description = "Invalid query string", body = crate::openapi::ErrorEnvelopeDoc),
        (status = 500, description = "Failed to fetch applications", body = crate::openapi::ErrorEnvelopeDoc)
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<ApplicationFilter>, QueryRejection>,
) -> Result<Json<Value>, JsonApiError> {
    let Query(filter) = query.map_err(JsonApiError::invalid_query)?;
    let applications = state
        .applications
        .list(&filter)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Failed to fetch applications"))?;
    info!(count = applications.len(), "list applications");
    Ok(Json(json!({"success": true, "applications": applications})))
}
