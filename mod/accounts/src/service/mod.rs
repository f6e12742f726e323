pub mod login;
pub mod register;
pub mod schema;
pub mod session;

use std::sync::Arc;

use thiserror::Error;

use prato_sql::{SQLError, SQLStore};

/// Accounts service error type.
#[derive(Debug, Error)]
pub enum AccountsError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("validation: {0}")]
    Validation(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("storage: {0}")]
    Storage(String),

    #[error("internal: {0}")]
    Internal(String),
}

impl From<AccountsError> for prato_core::ServiceError {
    fn from(e: AccountsError) -> Self {
        match e {
            AccountsError::NotFound(m) => prato_core::ServiceError::NotFound(m),
            AccountsError::Conflict(m) => prato_core::ServiceError::Conflict(m),
            AccountsError::Validation(m) => prato_core::ServiceError::Validation(m),
            AccountsError::Unauthorized(m) => prato_core::ServiceError::Unauthorized(m),
            AccountsError::Storage(m) => prato_core::ServiceError::Storage(m),
            AccountsError::Internal(m) => prato_core::ServiceError::Internal(m),
        }
    }
}

impl AccountsError {
    /// Map a storage error, promoting UNIQUE violations to Conflict with the
    /// given message.
    pub(crate) fn from_sql(e: SQLError, conflict_msg: &str) -> Self {
        if e.is_unique_violation() {
            AccountsError::Conflict(conflict_msg.to_string())
        } else {
            AccountsError::Storage(e.to_string())
        }
    }
}

/// Configuration for the accounts service.
#[derive(Debug, Clone)]
pub struct AccountsConfig {
    /// Session lifetime in seconds (default: 24h).
    pub session_ttl_secs: i64,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            session_ttl_secs: 86400,
        }
    }
}

/// The Accounts service. Holds the storage backend and configuration.
pub struct AccountsService {
    pub(crate) sql: Arc<dyn SQLStore>,
    pub(crate) config: AccountsConfig,
}

impl AccountsService {
    /// Create a new AccountsService, initializing the DB schema.
    pub fn new(
        sql: Arc<dyn SQLStore>,
        config: AccountsConfig,
    ) -> Result<Arc<Self>, AccountsError> {
        schema::init_schema(sql.as_ref())?;
        Ok(Arc::new(Self { sql, config }))
    }
}

// ── Password helpers ──

/// Hash a plain password with argon2id.
pub fn hash_password(password: &str) -> Result<String, AccountsError> {
    use argon2::Argon2;
    use password_hash::rand_core::OsRng;
    use password_hash::{PasswordHasher, SaltString};

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AccountsError::Internal(e.to_string()))
}

/// Verify a password against an argon2id hash.
pub fn verify_password(password: &str, hash: &str) -> bool {
    use argon2::Argon2;
    use password_hash::{PasswordHash, PasswordVerifier};

    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_round_trip() {
        let digest = hash_password("s3cret").unwrap();
        assert_ne!(digest, "s3cret");
        assert!(verify_password("s3cret", &digest));
        assert!(!verify_password("wrong", &digest));
    }

    #[test]
    fn verify_rejects_garbage_hash() {
        assert!(!verify_password("anything", "not-a-hash"));
    }
}
