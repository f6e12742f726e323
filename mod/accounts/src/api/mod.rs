mod login;
mod me;
mod middleware;
mod register;

use std::sync::Arc;

use axum::Router;

use crate::service::AccountsService;

/// Shared application state.
pub type AppState = Arc<AccountsService>;

/// Build the complete accounts API router, rooted at `/accounts`.
pub fn build_router(svc: Arc<AccountsService>) -> Router {
    let api = Router::new()
        .merge(register::routes())
        .merge(login::routes())
        .merge(me::routes());

    Router::new()
        .nest("/accounts", api)
        .layer(axum::middleware::from_fn_with_state(
            svc.clone(),
            middleware::auth_middleware,
        ))
        .with_state(svc)
}
