use axum::extract::{Extension, State};
use axum::routing::get;
use axum::{Json, Router};

use prato_core::{Identity, ServiceError};

use crate::api::AppState;
use crate::model::{ClientPublic, RestaurantPublic};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(me))
        .route("/client-me", get(client_me))
}

/// GET /accounts/me — the logged-in restaurant's own record.
async fn me(
    State(svc): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<RestaurantPublic>, ServiceError> {
    let id = identity
        .restaurant_id()
        .ok_or_else(|| ServiceError::Unauthorized("restaurant session required".into()))?;
    let restaurant = svc.get_restaurant(id).map_err(ServiceError::from)?;
    Ok(Json(restaurant.into()))
}

/// GET /accounts/client-me — the logged-in client's own record.
async fn client_me(
    State(svc): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<ClientPublic>, ServiceError> {
    let id = identity
        .client_id()
        .ok_or_else(|| ServiceError::Unauthorized("client session required".into()))?;
    let client = svc.get_client(id).map_err(ServiceError::from)?;
    Ok(Json(client.into()))
}
