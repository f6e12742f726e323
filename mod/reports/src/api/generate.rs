use axum::extract::{Extension, State};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};

use prato_core::{Identity, ServiceError};

use crate::api::{pdf_attachment, AppState};
use crate::model::{AnalysisRequest, OutputFormat, RecommendationRequest};
use crate::service::{ANALYSIS_TITLE, RECOMMENDATION_TITLE};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/business-analysis", post(business_analysis))
        .route("/recommendation", post(recommendation))
}

/// POST /reports/business-analysis — generate and persist an analysis of
/// the logged-in restaurant's reviews.
async fn business_analysis(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(input): Json<AnalysisRequest>,
) -> Result<Response, ServiceError> {
    let restaurant_id = identity
        .restaurant_id()
        .ok_or_else(|| ServiceError::Unauthorized("restaurant session required".into()))?;

    let report = state.service.business_analysis(restaurant_id).await?;

    match input.format {
        OutputFormat::Pdf => {
            let bytes = state.service.render(
                ANALYSIS_TITLE,
                report.restaurant_id,
                &report.created_at,
                &report.analysis,
            )?;
            let filename = format!("business_analysis_{}.pdf", report.restaurant_id);
            Ok(pdf_attachment(&filename, bytes))
        }
        OutputFormat::Json => Ok(Json(serde_json::json!({
            "report_id": report.id,
            "analysis": report.analysis,
        }))
        .into_response()),
    }
}

/// POST /reports/recommendation — generate a recommendation about one
/// restaurant for the logged-in client. Nothing is stored.
async fn recommendation(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(input): Json<RecommendationRequest>,
) -> Result<Response, ServiceError> {
    let client_id = identity
        .client_id()
        .ok_or_else(|| ServiceError::Unauthorized("client session required".into()))?;

    let rec = state
        .service
        .recommendation(client_id, input.restaurant_id)
        .await?;

    match input.format {
        OutputFormat::Pdf => {
            let bytes = state.service.render(
                RECOMMENDATION_TITLE,
                rec.restaurant_id,
                &rec.created_at,
                &rec.analysis,
            )?;
            let filename = format!("recommendation_{}.pdf", rec.restaurant_id);
            Ok(pdf_attachment(&filename, bytes))
        }
        OutputFormat::Json => Ok(Json(serde_json::json!({
            "analysis": rec.analysis,
        }))
        .into_response()),
    }
}
