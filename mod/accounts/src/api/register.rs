use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};

use prato_core::ServiceError;

use crate::api::AppState;
use crate::model::{CreateClient, CreateRestaurant};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_restaurant))
        .route("/register-client", post(register_client))
        .route("/restaurants/{id}/tags", get(restaurant_tags))
}

/// POST /accounts/register — restaurant registration.
async fn register_restaurant(
    State(svc): State<AppState>,
    Json(input): Json<CreateRestaurant>,
) -> Result<(axum::http::StatusCode, Json<serde_json::Value>), ServiceError> {
    let restaurant = svc.create_restaurant(input).map_err(ServiceError::from)?;
    Ok((
        axum::http::StatusCode::CREATED,
        Json(serde_json::json!({ "restaurant": restaurant })),
    ))
}

/// POST /accounts/register-client — client registration.
async fn register_client(
    State(svc): State<AppState>,
    Json(input): Json<CreateClient>,
) -> Result<(axum::http::StatusCode, Json<serde_json::Value>), ServiceError> {
    let client = svc.create_client(input).map_err(ServiceError::from)?;
    Ok((
        axum::http::StatusCode::CREATED,
        Json(serde_json::json!({ "client": client })),
    ))
}

/// GET /accounts/restaurants/{id}/tags — public tag list.
async fn restaurant_tags(
    State(svc): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let tags = svc.restaurant_tags(id).map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({ "tags": tags })))
}
