//! # Docman Server
//!
//! Entry point: loads configuration, connects to MySQL, wires the layers
//! and serves the REST API until a shutdown signal arrives.

use docman_config::{config_warnings, AppConfig, ConfigLoader};
use docman_core::{DocmanError, DocmanResult};
use docman_repository::create_pool;
use docman_rest::create_router;
use docman_server::{
    di::AppModuleBuilder,
    startup::{init_logging, print_banner, print_startup_info, seed_demo_user},
};
use tokio::signal;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::from_default_location() {
        Ok(loader) => loader.get().await,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    print_banner();

    for warning in config_warnings(&config) {
        warn!("{}", warning);
    }

    info!("Starting Docman Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    if let Err(e) = run(config).await {
        error!(error = %e.report(), "Application error");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> DocmanResult<()> {
    let db_pool = create_pool(&config.database).await?;

    if config.database.run_migrations {
        db_pool.run_migrations().await?;
    } else {
        warn!("Skipping database migrations");
    }

    let module = AppModuleBuilder::new()
        .with_database_pool(db_pool.clone())
        .with_security_config(config.security.clone())
        .build()?;

    seed_demo_user(module.auth_service().as_ref(), &config.seed).await?;

    let router = create_router(module.app_state(), module.token_provider(), &config.server);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| DocmanError::Internal(format!("Failed to bind {addr}: {e}")))?;

    print_startup_info(&addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| DocmanError::Internal(format!("REST server error: {e}")))?;

    db_pool.close().await;
    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
