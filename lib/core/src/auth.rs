//! Session resolution seam.
//!
//! Modules never inspect cookies or ambient state: the acting identity is
//! resolved from request headers through this trait and passed into handlers
//! explicitly. The concrete implementation (the accounts service) is
//! injected at startup time.

use axum::http::HeaderMap;
use serde::Serialize;

use crate::ServiceError;

/// The acting identity behind a request — exactly one of a restaurant or a
/// client, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Identity {
    Restaurant(i64),
    Client(i64),
}

impl Identity {
    /// The restaurant id, if this is a restaurant session.
    pub fn restaurant_id(&self) -> Option<i64> {
        match self {
            Identity::Restaurant(id) => Some(*id),
            Identity::Client(_) => None,
        }
    }

    /// The client id, if this is a client session.
    pub fn client_id(&self) -> Option<i64> {
        match self {
            Identity::Client(id) => Some(*id),
            Identity::Restaurant(_) => None,
        }
    }
}

/// Pluggable session resolver. Every authenticated endpoint goes through
/// this; the session token travels as `Authorization: Bearer <token>`.
pub trait Authenticator: Send + Sync + 'static {
    /// Resolve the request's session token to an identity.
    ///
    /// Fails with `Unauthorized` when the header is missing or the token is
    /// unknown, revoked, or expired.
    fn resolve(&self, headers: &HeaderMap) -> Result<Identity, ServiceError>;
}

/// Extract the Bearer token from the Authorization header.
pub fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

/// An authenticator that always resolves to a fixed identity. Used for
/// testing module routes without a live session store.
pub struct StaticIdentity(pub Identity);

impl Authenticator for StaticIdentity {
    fn resolve(&self, _headers: &HeaderMap) -> Result<Identity, ServiceError> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Bearer abc123".parse().unwrap());
        assert_eq!(extract_bearer(&headers), Some("abc123"));

        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Basic abc123".parse().unwrap());
        assert_eq!(extract_bearer(&headers), None);

        assert_eq!(extract_bearer(&HeaderMap::new()), None);
    }

    #[test]
    fn identity_accessors() {
        let r = Identity::Restaurant(7);
        assert_eq!(r.restaurant_id(), Some(7));
        assert_eq!(r.client_id(), None);

        let c = Identity::Client(3);
        assert_eq!(c.client_id(), Some(3));
        assert_eq!(c.restaurant_id(), None);
    }

    #[test]
    fn static_identity_resolves() {
        let auth = StaticIdentity(Identity::Client(42));
        let id = auth.resolve(&HeaderMap::new()).unwrap();
        assert_eq!(id, Identity::Client(42));
    }
}
