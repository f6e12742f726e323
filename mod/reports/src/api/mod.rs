mod generate;
mod history;
mod middleware;

use std::sync::Arc;

use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Router;
use prato_core::Authenticator;

use crate::service::ReportsService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ReportsService>,
    pub authenticator: Arc<dyn Authenticator>,
}

/// Build the complete reports API router, rooted at `/reports`. Every
/// route requires a session.
pub fn build_router(
    service: Arc<ReportsService>,
    authenticator: Arc<dyn Authenticator>,
) -> Router {
    let state = AppState {
        service,
        authenticator,
    };

    let api = Router::new()
        .merge(generate::routes())
        .merge(history::routes());

    Router::new()
        .nest("/reports", api)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth_middleware,
        ))
        .with_state(state)
}

/// A PDF body served as a file download.
pub(crate) fn pdf_attachment(filename: &str, bytes: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        bytes,
    )
        .into_response()
}
