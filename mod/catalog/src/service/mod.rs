mod favorites;
mod restaurants;
mod reviews;
mod schema;

use std::sync::Arc;

use prato_core::ServiceError;
use prato_sql::{SQLError, SQLStore};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("restaurant not found")]
    RestaurantNotFound,
    #[error("{0}")]
    Validation(String),
    #[error("restaurant is already a favorite")]
    AlreadyFavorite,
    #[error(transparent)]
    Sql(#[from] SQLError),
    #[error("{0}")]
    Internal(String),
}

impl From<CatalogError> for ServiceError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::RestaurantNotFound => ServiceError::NotFound(err.to_string()),
            CatalogError::Validation(msg) => ServiceError::Validation(msg),
            CatalogError::AlreadyFavorite => ServiceError::Conflict(err.to_string()),
            CatalogError::Sql(e) => ServiceError::Storage(e.to_string()),
            CatalogError::Internal(msg) => ServiceError::Internal(msg),
        }
    }
}

pub struct CatalogService {
    sql: Arc<dyn SQLStore>,
}

impl CatalogService {
    pub fn new(sql: Arc<dyn SQLStore>) -> Result<Self, ServiceError> {
        for ddl in schema::DDL {
            sql.exec(ddl, &[])
                .map_err(|e| ServiceError::Storage(e.to_string()))?;
        }
        Ok(Self { sql })
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use std::sync::Arc;

    use prato_sql::{SQLStore, SqliteStore, Value};

    use super::CatalogService;

    /// Reviews and favorites reference the accounts tables by id; tests
    /// stand up just enough of them to satisfy the foreign keys.
    const FIXTURE_DDL: &[&str] = &[
        "CREATE TABLE restaurants (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            data TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
        "CREATE TABLE clients (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL UNIQUE,
            national_id TEXT NOT NULL UNIQUE,
            data TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
    ];

    pub fn service() -> (CatalogService, Arc<dyn SQLStore>) {
        let sql: Arc<dyn SQLStore> = Arc::new(SqliteStore::open_in_memory().unwrap());
        for ddl in FIXTURE_DDL {
            sql.exec(ddl, &[]).unwrap();
        }
        let service = CatalogService::new(sql.clone()).unwrap();
        (service, sql)
    }

    pub fn seed_restaurant(sql: &Arc<dyn SQLStore>, name: &str) -> i64 {
        sql.insert(
            "INSERT INTO restaurants (name, email, data, created_at)
             VALUES (?1, ?2, '{}', '2026-01-01T00:00:00+00:00')",
            &[
                Value::Text(name.to_string()),
                Value::Text(format!("{name}@example.com")),
            ],
        )
        .unwrap()
    }

    pub fn seed_client(sql: &Arc<dyn SQLStore>, email: &str) -> i64 {
        sql.insert(
            "INSERT INTO clients (email, national_id, data, created_at)
             VALUES (?1, ?2, '{}', '2026-01-01T00:00:00+00:00')",
            &[
                Value::Text(email.to_string()),
                Value::Text(format!("nid-{email}")),
            ],
        )
        .unwrap()
    }
}
