use axum::extract::{Extension, State};
use axum::routing::{get, post};
use axum::{Json, Router};

use prato_core::{Identity, ServiceError};

use crate::api::AppState;
use crate::model::{FavoriteAction, FavoriteRequest, RestaurantSummary};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/favorites", post(set_favorite).get(list_favorites))
        .route("/favorites/restaurants", get(list_favorite_restaurants))
}

fn client_id(identity: &Identity) -> Result<i64, ServiceError> {
    identity
        .client_id()
        .ok_or_else(|| ServiceError::Unauthorized("client session required".into()))
}

/// POST /catalog/favorites — add or remove a favorite for the logged-in
/// client.
async fn set_favorite(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(input): Json<FavoriteRequest>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let client = client_id(&identity)?;
    let action = FavoriteAction::parse(&input.action).ok_or_else(|| {
        ServiceError::Validation(format!("unknown favorite action: {}", input.action))
    })?;
    state
        .service
        .set_favorite(client, input.restaurant_id, action)?;
    Ok(Json(serde_json::json!({ "status": "ok" })))
}

/// GET /catalog/favorites — favorited restaurant ids.
async fn list_favorites(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<Vec<i64>>, ServiceError> {
    let client = client_id(&identity)?;
    Ok(Json(state.service.list_favorite_ids(client)?))
}

/// GET /catalog/favorites/restaurants — favorited restaurants with
/// rating aggregates.
async fn list_favorite_restaurants(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<Vec<RestaurantSummary>>, ServiceError> {
    let client = client_id(&identity)?;
    Ok(Json(state.service.list_favorite_restaurants(client)?))
}
