use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};

use prato_core::ServiceError;

use crate::api::AppState;
use crate::model::{CreateReview, Review, ReviewQuery};

pub fn routes() -> Router<AppState> {
    Router::new().route("/reviews", post(submit_review).get(list_reviews))
}

/// POST /catalog/reviews — append a review for a restaurant.
async fn submit_review(
    State(state): State<AppState>,
    Json(input): Json<CreateReview>,
) -> Result<(StatusCode, Json<Review>), ServiceError> {
    let review = state.service.submit_review(&input)?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// GET /catalog/reviews?restaurant_id=N — reviews, most recent first.
async fn list_reviews(
    State(state): State<AppState>,
    Query(query): Query<ReviewQuery>,
) -> Result<Json<Vec<Review>>, ServiceError> {
    let rows = state.service.list_reviews(query.restaurant_id, query.limit)?;
    Ok(Json(rows))
}
