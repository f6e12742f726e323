use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;

use prato_core::{ServiceError, extract_bearer};

use crate::api::AppState;

#[derive(Debug, Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
}

/// POST /accounts/login — credential check, issues an opaque session token.
async fn login(
    State(svc): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let session = svc
        .login(&body.email, &body.password)
        .map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({
        "token": session.token,
        "user_type": session.user_type,
        "expires_at": session.expires_at,
    })))
}

/// POST /accounts/logout — revokes the presented session. Idempotent: an
/// absent or unknown token still reports success.
async fn logout(
    State(svc): State<AppState>,
    headers: axum::http::HeaderMap,
) -> Result<Json<serde_json::Value>, ServiceError> {
    if let Some(token) = extract_bearer(&headers) {
        svc.revoke_token(token).map_err(ServiceError::from)?;
    }
    Ok(Json(serde_json::json!({ "message": "logged out" })))
}
