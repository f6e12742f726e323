mod collect;
mod generate;
mod prompt;
mod schema;

pub use generate::{ANALYSIS_TITLE, RECOMMENDATION_TITLE};

use std::sync::Arc;

use prato_core::ServiceError;
use prato_genai::{GenAiError, TextGenerator};
use prato_pdf::{DocumentRenderer, PdfError};
use prato_sql::{SQLError, SQLStore};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportsError {
    #[error("report not found")]
    ReportNotFound,
    #[error("restaurant not found")]
    RestaurantNotFound,
    #[error("{0}")]
    Validation(String),
    #[error("text generation failed: {0}")]
    Upstream(String),
    #[error(transparent)]
    Sql(#[from] SQLError),
    #[error("{0}")]
    Internal(String),
}

impl From<GenAiError> for ReportsError {
    fn from(err: GenAiError) -> Self {
        ReportsError::Upstream(err.to_string())
    }
}

impl From<PdfError> for ReportsError {
    fn from(err: PdfError) -> Self {
        ReportsError::Internal(err.to_string())
    }
}

impl From<ReportsError> for ServiceError {
    fn from(err: ReportsError) -> Self {
        match err {
            ReportsError::ReportNotFound | ReportsError::RestaurantNotFound => {
                ServiceError::NotFound(err.to_string())
            }
            ReportsError::Validation(msg) => ServiceError::Validation(msg),
            ReportsError::Upstream(msg) => ServiceError::Upstream(msg),
            ReportsError::Sql(e) => ServiceError::Storage(e.to_string()),
            ReportsError::Internal(msg) => ServiceError::Internal(msg),
        }
    }
}

pub struct ReportsService {
    sql: Arc<dyn SQLStore>,
    generator: Arc<dyn TextGenerator>,
    renderer: Arc<dyn DocumentRenderer>,
}

impl ReportsService {
    pub fn new(
        sql: Arc<dyn SQLStore>,
        generator: Arc<dyn TextGenerator>,
        renderer: Arc<dyn DocumentRenderer>,
    ) -> Result<Self, ServiceError> {
        for ddl in schema::DDL {
            sql.exec(ddl, &[])
                .map_err(|e| ServiceError::Storage(e.to_string()))?;
        }
        Ok(Self {
            sql,
            generator,
            renderer,
        })
    }
}
