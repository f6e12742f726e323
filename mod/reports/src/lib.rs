//! Report generation: LLM-written business analysis and recommendation
//! reports, report history, and PDF download.

pub mod api;
pub mod model;
pub mod service;

use std::sync::Arc;

use axum::Router;
use prato_core::{Authenticator, Module, ServiceError};
use prato_genai::TextGenerator;
use prato_pdf::DocumentRenderer;
use prato_sql::SQLStore;

use crate::service::ReportsService;

pub struct ReportsModule {
    service: Arc<ReportsService>,
    authenticator: Arc<dyn Authenticator>,
}

impl ReportsModule {
    pub fn new(
        sql: Arc<dyn SQLStore>,
        generator: Arc<dyn TextGenerator>,
        renderer: Arc<dyn DocumentRenderer>,
        authenticator: Arc<dyn Authenticator>,
    ) -> Result<Self, ServiceError> {
        let service = Arc::new(ReportsService::new(sql, generator, renderer)?);
        Ok(Self {
            service,
            authenticator,
        })
    }
}

impl Module for ReportsModule {
    fn name(&self) -> &str {
        "reports"
    }

    fn routes(&self) -> Router {
        api::build_router(self.service.clone(), self.authenticator.clone())
    }
}
