use axum::{extract::{rejection::JsonRejection, State}, Json};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use service::auth::domain::{SigninInput, SignupInput};

use crate::{errors::JsonApiError, state::ServerState};

const FAILURE: &str = "Internal server error";

/// Body of `POST /auth`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRequest {
    pub action: Option<String>,
    #[serde(default)]
    pub user_data: Value,
}

#[utoipa::path(
    post, path = "/auth", tag = "auth",
    request_body = crate::openapi::AuthRequestDoc,
    responses(
        (status = 200, description = "Signed up or signed in", body = crate::openapi::UserEnvelopeDoc),
        (status = 400, description = "Missing fields, duplicate email or invalid action", body = crate::openapi::ErrorEnvelopeDoc),
        (status = 401, description = "Invalid email or password", body = crate::openapi::ErrorEnvelopeDoc),
        (status = 500, description = "Internal server error", body = crate::openapi::ErrorEnvelopeDoc)
    )
)]
pub async fn auth(
    State(state): State<ServerState>,
    payload: Result<Json<AuthRequest>, JsonRejection>,
) -> Result<Json<Value>, JsonApiError> {
    let Json(req) = payload.map_err(JsonApiError::invalid_body)?;
    // a missing userData is treated as an empty form so it fails field validation
    let user_data = match req.user_data {
        Value::Null => Value::Object(Map::new()),
        other => other,
    };

    match req.action.as_deref() {
        Some("signup") => {
            let input: SignupInput = serde_json::from_value(user_data).map_err(JsonApiError::invalid_body)?;
            let user = state
                .auth
                .signup(input)
                .await
                .map_err(|e| JsonApiError::from_service(e, FAILURE))?;
            Ok(Json(json!({"success": true, "message": "User registered successfully", "user": user})))
        }
        Some("signin") => {
            let input: SigninInput = serde_json::from_value(user_data).map_err(JsonApiError::invalid_body)?;
            let user = state
                .auth
                .signin(input)
                .await
                .map_err(|e| JsonApiError::from_service(e, FAILURE))?;
            Ok(Json(json!({"success": true, "message": "Login successful", "user": user})))
        }
        _ => Err(JsonApiError::bad_request("Invalid action")),
    }
}

#[utoipa::path(
    post, path = "/auth/login", tag = "auth",
    request_body = crate::openapi::LoginRequestDoc,
    responses(
        (status = 200, description = "Logged in", body = crate::openapi::UserEnvelopeDoc),
        (status = 400, description = "Email and password are required", body = crate::openapi::ErrorEnvelopeDoc),
        (status = 401, description = "Invalid email or password", body = crate::openapi::ErrorEnvelopeDoc),
        (status = 500, description = "Internal server error", body = crate::openapi::ErrorEnvelopeDoc)
    )
)]
pub async fn login(
    State(state): State<ServerState>,
    payload: Result<Json<SigninInput>, JsonRejection>,
) -> Result<Json<Value>, JsonApiError> {
    let Json(input) = payload.map_err(JsonApiError::invalid_body)?;
    let user = state
        .auth
        .signin(input)
        .await
        .map_err(|e| JsonApiError::from_service(e, FAILURE))?;
    Ok(Json(json!({"success": true, "message": "Login successful", "user": user})))
}
