//! Restaurant catalog: listing with rating aggregates, reviews, and
//! per-client favorites.

pub mod api;
pub mod model;
pub mod service;

use std::sync::Arc;

use axum::Router;
use prato_core::{Authenticator, Module, ServiceError};
use prato_sql::SQLStore;

use crate::service::CatalogService;

pub struct CatalogModule {
    service: Arc<CatalogService>,
    authenticator: Arc<dyn Authenticator>,
}

impl CatalogModule {
    pub fn new(
        sql: Arc<dyn SQLStore>,
        authenticator: Arc<dyn Authenticator>,
    ) -> Result<Self, ServiceError> {
        let service = Arc::new(CatalogService::new(sql)?);
        Ok(Self {
            service,
            authenticator,
        })
    }

    pub fn service(&self) -> Arc<CatalogService> {
        self.service.clone()
    }
}

impl Module for CatalogModule {
    fn name(&self) -> &str {
        "catalog"
    }

    fn routes(&self) -> Router {
        api::build_router(self.service.clone(), self.authenticator.clone())
    }
}
