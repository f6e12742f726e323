//! `pratod` — the Prato server binary.
//!
//! Usage:
//!   pratod -c <context-name-or-path> [--listen <addr>]
//!
//! The context name resolves to `/etc/prato/<name>.toml`.
//! If a path with `/` or `.` is given, it's used directly.

mod config;
mod routes;

use std::sync::Arc;

use clap::Parser;
use prato_core::Module;
use tracing::info;

use config::ServerConfig;

/// Prato server.
#[derive(Parser, Debug)]
#[command(name = "pratod", about = "Prato restaurant-review server")]
struct Cli {
    /// Context name or path to config file.
    #[arg(short = 'c', long = "config", required = true)]
    config: String,

    /// Listen address.
    #[arg(long = "listen", default_value = "0.0.0.0:8080")]
    listen: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    // Load server configuration.
    let config_path = ServerConfig::resolve_path(&cli.config);
    info!("Loading configuration from {}", config_path.display());
    let server_config = ServerConfig::load(&config_path)?;
    server_config.verify()?;

    // Initialize storage.
    let data_dir = std::path::PathBuf::from(&server_config.storage.data_dir);
    std::fs::create_dir_all(&data_dir)?;

    let core_config = prato_core::ServiceConfig {
        data_dir: Some(data_dir.clone()),
        listen: cli.listen.clone(),
        ..Default::default()
    };

    let sql: Arc<dyn prato_sql::SQLStore> = Arc::new(
        prato_sql::SqliteStore::open(&core_config.resolve_sqlite_path())
            .map_err(|e| anyhow::anyhow!("failed to open SQL store: {}", e))?,
    );

    // Accounts first: its service doubles as the session resolver for
    // the other modules.
    let accounts_module = accounts::AccountsModule::new(
        Arc::clone(&sql),
        accounts::service::AccountsConfig::default(),
    )?;
    let authenticator: Arc<dyn prato_core::Authenticator> = accounts_module.service().clone();
    info!("Accounts module initialized");

    let catalog_module = catalog::CatalogModule::new(Arc::clone(&sql), authenticator.clone())?;
    info!("Catalog module initialized");

    let generator: Arc<dyn prato_genai::TextGenerator> = Arc::new(prato_genai::GeminiClient::new(
        server_config.genai.api_key.clone(),
        server_config.genai.model.clone(),
    ));
    let renderer: Arc<dyn prato_pdf::DocumentRenderer> = Arc::new(prato_pdf::PdfRenderer);
    let reports_module = reports::ReportsModule::new(
        Arc::clone(&sql),
        generator,
        renderer,
        authenticator.clone(),
    )?;
    info!("Reports module initialized");

    let module_routes = vec![
        accounts_module.routes(),
        catalog_module.routes(),
        reports_module.routes(),
    ];

    // Build router.
    let app = routes::build_router(module_routes);

    // Start server.
    let listener = tokio::net::TcpListener::bind(&cli.listen).await?;
    info!("Prato server listening on {}", cli.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
