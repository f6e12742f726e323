use axum::extract::{Extension, Path, State};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};

use prato_core::{Identity, ServiceError};

use crate::api::{pdf_attachment, AppState};
use crate::service::ANALYSIS_TITLE;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/history", get(history))
        .route("/{id}/download", get(download))
}

fn restaurant_id(identity: &Identity) -> Result<i64, ServiceError> {
    identity
        .restaurant_id()
        .ok_or_else(|| ServiceError::Unauthorized("restaurant session required".into()))
}

/// GET /reports/history — the restaurant's ten most recent reports.
async fn history(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let id = restaurant_id(&identity)?;
    let reports = state.service.history(id)?;
    Ok(Json(serde_json::json!({ "reports": reports })))
}

/// GET /reports/{id}/download — re-render a persisted report as PDF.
///
/// The document embeds the report's stored generation timestamp, so every
/// download of the same report is byte-identical.
async fn download(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(report_id): Path<i64>,
) -> Result<Response, ServiceError> {
    let owner = restaurant_id(&identity)?;
    let report = state.service.get_report(report_id, owner)?;
    let bytes = state.service.render(
        ANALYSIS_TITLE,
        report.restaurant_id,
        &report.created_at,
        &report.analysis,
    )?;
    let filename = format!("report_{}.pdf", report.created_at.replace(':', "-"));
    Ok(pdf_attachment(&filename, bytes))
}
