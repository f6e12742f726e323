use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};

use prato_core::ServiceError;

use crate::api::AppState;
use crate::model::{RestaurantQuery, RestaurantSummary};

pub fn routes() -> Router<AppState> {
    Router::new().route("/restaurants", get(list_restaurants))
}

/// GET /catalog/restaurants — listing with rating aggregates.
///
/// `id` fetches a single restaurant, `search` filters by name, `random`
/// shuffles the plain listing, `limit` caps the result.
async fn list_restaurants(
    State(state): State<AppState>,
    Query(query): Query<RestaurantQuery>,
) -> Result<Json<Vec<RestaurantSummary>>, ServiceError> {
    let rows = state.service.list_restaurants(&query)?;
    Ok(Json(rows))
}
