use prato_sql::SQLStore;

use crate::service::AccountsError;

/// Initialize the SQLite schema for accounts resources.
pub fn init_schema(sql: &dyn SQLStore) -> Result<(), AccountsError> {
    let statements = [
        // Restaurants: business identities
        "CREATE TABLE IF NOT EXISTS restaurants (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            data TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
        "CREATE INDEX IF NOT EXISTS idx_restaurants_name ON restaurants(name)",

        // Clients: diner identities
        "CREATE TABLE IF NOT EXISTS clients (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL UNIQUE,
            national_id TEXT NOT NULL UNIQUE,
            data TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",

        // Sessions: opaque token scoped to one identity
        "CREATE TABLE IF NOT EXISTS sessions (
            token TEXT PRIMARY KEY,
            kind TEXT NOT NULL,
            subject_id INTEGER NOT NULL,
            revoked INTEGER NOT NULL DEFAULT 0,
            issued_at TEXT NOT NULL,
            expires_at TEXT NOT NULL
        )",
        "CREATE INDEX IF NOT EXISTS idx_sessions_subject ON sessions(kind, subject_id)",
    ];

    for stmt in &statements {
        sql.exec(stmt, &[])
            .map_err(|e| AccountsError::Storage(e.to_string()))?;
    }

    Ok(())
}
