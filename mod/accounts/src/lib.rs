//! Accounts module — restaurant/client registration, login, sessions.
//!
//! # Resources
//!
//! - **Restaurant** — business identity with tax id and tag list
//! - **Client** — diner identity with national id and tag list
//! - **Session** — opaque token scoped to exactly one identity
//!
//! The service implements [`prato_core::Authenticator`], so other modules
//! resolve the acting identity through the injected trait object rather
//! than through ambient state.

pub mod api;
pub mod model;
pub mod service;

use std::sync::Arc;

use axum::Router;

use prato_core::Module;

use crate::service::AccountsService;

/// Accounts module implementing the Module trait.
pub struct AccountsModule {
    service: Arc<AccountsService>,
}

impl AccountsModule {
    /// Create a new AccountsModule, initializing its schema.
    pub fn new(
        sql: Arc<dyn prato_sql::SQLStore>,
        config: service::AccountsConfig,
    ) -> Result<Self, prato_core::ServiceError> {
        let service = AccountsService::new(sql, config).map_err(prato_core::ServiceError::from)?;
        Ok(Self { service })
    }

    /// Get a reference to the underlying AccountsService.
    pub fn service(&self) -> &Arc<AccountsService> {
        &self.service
    }
}

impl Module for AccountsModule {
    fn name(&self) -> &str {
        "accounts"
    }

    fn routes(&self) -> Router {
        api::build_router(self.service.clone())
    }
}
