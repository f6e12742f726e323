use axum::http::HeaderMap;

use prato_core::{Authenticator, Identity, ServiceError, extract_bearer, new_token, now_rfc3339};
use prato_sql::Value;

use crate::model::{Session, SessionKind};
use crate::service::{AccountsError, AccountsService};

impl AccountsService {
    /// Issue an opaque session token scoped to exactly one identity.
    pub fn issue_session(&self, identity: Identity) -> Result<Session, AccountsError> {
        let (kind, subject_id) = match identity {
            Identity::Restaurant(id) => (SessionKind::Restaurant, id),
            Identity::Client(id) => (SessionKind::Client, id),
        };

        let now = chrono::Utc::now();
        let expires = now + chrono::Duration::seconds(self.config.session_ttl_secs);
        let session = Session {
            token: new_token(),
            kind,
            subject_id,
            revoked: false,
            issued_at: now.to_rfc3339(),
            expires_at: expires.to_rfc3339(),
        };

        self.sql
            .insert(
                "INSERT INTO sessions (token, kind, subject_id, revoked, issued_at, expires_at)
                 VALUES (?1, ?2, ?3, 0, ?4, ?5)",
                &[
                    Value::Text(session.token.clone()),
                    Value::Text(session.kind.as_str().to_string()),
                    Value::Integer(session.subject_id),
                    Value::Text(session.issued_at.clone()),
                    Value::Text(session.expires_at.clone()),
                ],
            )
            .map_err(|e| AccountsError::Storage(e.to_string()))?;

        Ok(session)
    }

    /// Resolve a token to its identity. Unknown, revoked, and expired tokens
    /// all fail the same way.
    pub fn resolve_token(&self, token: &str) -> Result<Identity, AccountsError> {
        let rows = self
            .sql
            .query(
                "SELECT kind, subject_id, revoked, expires_at FROM sessions WHERE token = ?1",
                &[Value::Text(token.to_string())],
            )
            .map_err(|e| AccountsError::Storage(e.to_string()))?;

        let row = rows
            .first()
            .ok_or_else(|| AccountsError::Unauthorized("invalid session".into()))?;

        if row.get_i64("revoked").unwrap_or(0) != 0 {
            return Err(AccountsError::Unauthorized("session has been revoked".into()));
        }

        let expires_at = row
            .get_str("expires_at")
            .ok_or_else(|| AccountsError::Internal("missing expires_at column".into()))?;
        let expires = chrono::DateTime::parse_from_rfc3339(expires_at)
            .map_err(|e| AccountsError::Internal(e.to_string()))?;
        if expires < chrono::Utc::now() {
            return Err(AccountsError::Unauthorized("session has expired".into()));
        }

        let kind = row
            .get_str("kind")
            .and_then(SessionKind::parse)
            .ok_or_else(|| AccountsError::Internal("bad session kind".into()))?;
        let subject_id = row
            .get_i64("subject_id")
            .ok_or_else(|| AccountsError::Internal("missing subject_id column".into()))?;

        Ok(match kind {
            SessionKind::Restaurant => Identity::Restaurant(subject_id),
            SessionKind::Client => Identity::Client(subject_id),
        })
    }

    /// Revoke a session. Revoking an unknown token is a no-op, so logout is
    /// idempotent.
    pub fn revoke_token(&self, token: &str) -> Result<(), AccountsError> {
        self.sql
            .exec(
                "UPDATE sessions SET revoked = 1 WHERE token = ?1",
                &[Value::Text(token.to_string())],
            )
            .map_err(|e| AccountsError::Storage(e.to_string()))?;
        Ok(())
    }
}

impl Authenticator for AccountsService {
    fn resolve(&self, headers: &HeaderMap) -> Result<Identity, ServiceError> {
        let token = extract_bearer(headers)
            .ok_or_else(|| ServiceError::Unauthorized("missing authorization header".into()))?;
        self.resolve_token(token).map_err(ServiceError::from)
    }
}
