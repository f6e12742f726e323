use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use prato_core::Authenticator;

use crate::api::AppState;

/// Paths that don't require a session.
const PUBLIC_PATHS: &[&str] = &[
    "/accounts/register",
    "/accounts/login",
    "/accounts/logout",
    "/accounts/restaurants/",
];

/// Session middleware.
///
/// Resolves the Bearer token through the accounts service and stores the
/// resulting Identity as an Extension for handlers. Public paths
/// (registration, login, logout, restaurant tags) are excluded.
pub async fn auth_middleware(
    State(svc): State<AppState>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();

    if is_public_path(&path) {
        return next.run(req).await;
    }

    match svc.resolve(req.headers()) {
        Ok(identity) => {
            req.extensions_mut().insert(identity);
            next.run(req).await
        }
        Err(e) => e.into_response(),
    }
}

/// Check if a path is public (no session required).
fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.iter().any(|prefix| path.starts_with(prefix))
}
