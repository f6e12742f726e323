use thiserror::Error;

#[derive(Error, Debug)]
pub enum SQLError {
    #[error("query error: {0}")]
    Query(String),

    #[error("execution error: {0}")]
    Execution(String),

    #[error("connection error: {0}")]
    Connection(String),
}

impl SQLError {
    /// Whether this error was caused by a UNIQUE constraint violation.
    /// Callers map this to their Conflict variant.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            SQLError::Execution(m) | SQLError::Query(m) => m.contains("UNIQUE constraint"),
            SQLError::Connection(_) => false,
        }
    }
}
