use serde::Serialize;

use prato_core::Identity;
use prato_sql::Value;

use crate::model::{Client, Restaurant, Session};
use crate::service::{AccountsError, AccountsService, verify_password};

/// Outcome of a successful login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginSession {
    pub token: String,
    pub user_type: &'static str,
    pub expires_at: String,
}

impl AccountsService {
    /// Check credentials and issue a session.
    ///
    /// The restaurant table is checked first, then the client table; if an
    /// email somehow existed in both, the restaurant identity wins. Both a
    /// missing account and a digest mismatch produce the same generic
    /// Unauthorized, so callers cannot enumerate registered emails.
    pub fn login(&self, email: &str, password: &str) -> Result<LoginSession, AccountsError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AccountsError::Validation("email and password are required".into()));
        }

        if let Some(restaurant) = self.find_restaurant_by_email(email)? {
            if verify_password(password, &restaurant.password_hash) {
                let session = self.issue_session(Identity::Restaurant(restaurant.id))?;
                tracing::info!(restaurant_id = restaurant.id, "restaurant login");
                return Ok(login_session(session, "restaurant"));
            }
            // Fall through: a client row with the same email may still match.
        }

        if let Some(client) = self.find_client_by_email(email)? {
            if verify_password(password, &client.password_hash) {
                let session = self.issue_session(Identity::Client(client.id))?;
                tracing::info!(client_id = client.id, "client login");
                return Ok(login_session(session, "client"));
            }
        }

        Err(AccountsError::Unauthorized("invalid email or password".into()))
    }

    fn find_restaurant_by_email(&self, email: &str) -> Result<Option<Restaurant>, AccountsError> {
        let rows = self
            .sql
            .query(
                "SELECT id, data FROM restaurants WHERE email = ?1",
                &[Value::Text(email.trim().to_string())],
            )
            .map_err(|e| AccountsError::Storage(e.to_string()))?;
        match rows.first() {
            None => Ok(None),
            Some(row) => {
                let id = row
                    .get_i64("id")
                    .ok_or_else(|| AccountsError::Internal("missing id column".into()))?;
                let data = row
                    .get_str("data")
                    .ok_or_else(|| AccountsError::Internal("missing data column".into()))?;
                let mut restaurant: Restaurant = serde_json::from_str(data)
                    .map_err(|e| AccountsError::Internal(e.to_string()))?;
                restaurant.id = id;
                Ok(Some(restaurant))
            }
        }
    }

    fn find_client_by_email(&self, email: &str) -> Result<Option<Client>, AccountsError> {
        let rows = self
            .sql
            .query(
                "SELECT id, data FROM clients WHERE email = ?1",
                &[Value::Text(email.trim().to_string())],
            )
            .map_err(|e| AccountsError::Storage(e.to_string()))?;
        match rows.first() {
            None => Ok(None),
            Some(row) => {
                let id = row
                    .get_i64("id")
                    .ok_or_else(|| AccountsError::Internal("missing id column".into()))?;
                let data = row
                    .get_str("data")
                    .ok_or_else(|| AccountsError::Internal("missing data column".into()))?;
                let mut client: Client = serde_json::from_str(data)
                    .map_err(|e| AccountsError::Internal(e.to_string()))?;
                client.id = id;
                Ok(Some(client))
            }
        }
    }
}

fn login_session(session: Session, user_type: &'static str) -> LoginSession {
    LoginSession {
        token: session.token,
        user_type,
        expires_at: session.expires_at,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use prato_sql::SqliteStore;

    use crate::model::{CreateClient, CreateRestaurant};
    use crate::service::{AccountsConfig, AccountsService};
    use prato_core::Identity;

    fn test_service() -> Arc<AccountsService> {
        let sql = Arc::new(SqliteStore::open_in_memory().unwrap());
        AccountsService::new(sql, AccountsConfig::default()).unwrap()
    }

    fn seed(svc: &AccountsService) -> (i64, i64) {
        let r = svc
            .create_restaurant(CreateRestaurant {
                name: "Cantina Verde".to_string(),
                tax_id: "11.222.333/0001-44".to_string(),
                email: "cantina@example.com".to_string(),
                password: "basil".to_string(),
                tags: vec![],
            })
            .unwrap();
        let c = svc
            .create_client(CreateClient {
                first_name: "Rui".to_string(),
                last_name: "Lima".to_string(),
                national_id: "987.654.321-00".to_string(),
                phone: "+55 21 99876-5432".to_string(),
                email: "rui@example.com".to_string(),
                password: "fennel".to_string(),
                tags: vec![],
            })
            .unwrap();
        (r.id, c.id)
    }

    #[test]
    fn restaurant_login_issues_restaurant_session() {
        let svc = test_service();
        let (restaurant_id, _) = seed(&svc);

        let login = svc.login("cantina@example.com", "basil").unwrap();
        assert_eq!(login.user_type, "restaurant");

        let identity = svc.resolve_token(&login.token).unwrap();
        assert_eq!(identity, Identity::Restaurant(restaurant_id));
    }

    #[test]
    fn client_login_issues_client_session() {
        let svc = test_service();
        let (_, client_id) = seed(&svc);

        let login = svc.login("rui@example.com", "fennel").unwrap();
        assert_eq!(login.user_type, "client");
        assert_eq!(svc.resolve_token(&login.token).unwrap(), Identity::Client(client_id));
    }

    #[test]
    fn wrong_password_is_unauthorized() {
        let svc = test_service();
        seed(&svc);
        let err = svc.login("cantina@example.com", "wrong").unwrap_err();
        assert!(matches!(err, crate::service::AccountsError::Unauthorized(_)));
    }

    #[test]
    fn unknown_email_is_unauthorized() {
        let svc = test_service();
        seed(&svc);
        let err = svc.login("nobody@example.com", "basil").unwrap_err();
        assert!(matches!(err, crate::service::AccountsError::Unauthorized(_)));
    }

    #[test]
    fn blank_credentials_are_invalid_input() {
        let svc = test_service();
        let err = svc.login("  ", "").unwrap_err();
        assert!(matches!(err, crate::service::AccountsError::Validation(_)));
    }
}
