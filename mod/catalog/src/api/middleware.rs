use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use prato_core::Authenticator;

use crate::api::AppState;

/// Paths that don't require a session.
const PUBLIC_PATHS: &[&str] = &["/catalog/restaurants", "/catalog/reviews"];

/// Session middleware for the favorites routes. Browsing and reviewing
/// are anonymous; everything under /catalog/favorites needs a session.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();

    if is_public_path(&path) {
        return next.run(req).await;
    }

    match state.authenticator.resolve(req.headers()) {
        Ok(identity) => {
            req.extensions_mut().insert(identity);
            next.run(req).await
        }
        Err(e) => e.into_response(),
    }
}

fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.iter().any(|prefix| path.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favorites_require_a_session() {
        assert!(is_public_path("/catalog/restaurants"));
        assert!(is_public_path("/catalog/reviews"));
        assert!(!is_public_path("/catalog/favorites"));
        assert!(!is_public_path("/catalog/favorites/restaurants"));
    }
}
