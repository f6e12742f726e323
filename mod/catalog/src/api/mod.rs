mod favorites;
mod middleware;
mod restaurants;
mod reviews;

use std::sync::Arc;

use axum::Router;
use prato_core::Authenticator;

use crate::service::CatalogService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CatalogService>,
    pub authenticator: Arc<dyn Authenticator>,
}

/// Build the complete catalog API router, rooted at `/catalog`.
pub fn build_router(
    service: Arc<CatalogService>,
    authenticator: Arc<dyn Authenticator>,
) -> Router {
    let state = AppState {
        service,
        authenticator,
    };

    let api = Router::new()
        .merge(restaurants::routes())
        .merge(reviews::routes())
        .merge(favorites::routes());

    Router::new()
        .nest("/catalog", api)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth_middleware,
        ))
        .with_state(state)
}
