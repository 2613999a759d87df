//! Server module for managing HTTP server lifecycle
//!
//! This module handles server initialization, startup, and graceful shutdown.

use std::future::Future;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;

use crate::api::routes::create_router;
use crate::config::{Environment, Settings};
use crate::db::Database;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// HTTP server manager
pub struct Server {
    settings: Settings,
}

impl Server {
    /// Create a new server with the given settings
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Start the server and run until Ctrl+C or SIGTERM
    pub async fn run(self) -> AppResult<()> {
        self.run_until(shutdown_signal()).await
    }

    /// Start the server and run until `shutdown` resolves
    ///
    /// The database is connected before the listener is bound, so a store
    /// that cannot be reached stops startup instead of failing per request.
    /// In-flight requests are drained before the connection is closed.
    ///
    /// # Errors
    /// - Database connection errors
    /// - Address binding errors
    /// - Server runtime errors
    pub async fn run_until<F>(self, shutdown: F) -> AppResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.log_startup();

        tracing::info!(backend = %self.settings.database.backend.as_str(), "Connecting to database...");
        let database = Database::connect(&self.settings.database).await?;
        tracing::info!("Database connected");

        let state = AppState::new(&database);
        let router = create_router(state);

        let address = self.settings.server.address();
        let listener = match TcpListener::bind(&address).await {
            Ok(listener) => listener,
            Err(e) => {
                tracing::error!(error = %e, address = %address, "Failed to bind to address");
                database.shutdown().await;
                return Err(AppError::Internal {
                    source: anyhow::Error::new(e).context(format!("Failed to bind to {address}")),
                });
            }
        };

        let local_addr = listener
            .local_addr()
            .map(|addr| addr.to_string())
            .unwrap_or(address);
        tracing::info!(address = %local_addr, "Server listening");

        let served = axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .context("HTTP server terminated with an error");

        database.shutdown().await;
        tracing::info!("Server shutdown complete");

        served.map_err(AppError::from)
    }

    fn log_startup(&self) {
        tracing::info!(
            app_name = %self.settings.application.name,
            app_version = %self.settings.application.version,
            environment = %Environment::from_env().as_str(),
            "Application starting"
        );

        tracing::info!(
            host = %self.settings.server.host,
            port = %self.settings.server.port,
            "Server configuration loaded"
        );

        // The URI may carry credentials; only the non-secret parts are logged
        tracing::info!(
            backend = %self.settings.database.backend.as_str(),
            database = %self.settings.database.name,
            collection = %self.settings.database.collection,
            max_pool_size = %self.settings.database.max_pool_size,
            connect_timeout = %self.settings.database.connect_timeout,
            "Database configuration loaded"
        );

        tracing::info!(
            level = %self.settings.logger.level,
            console_enabled = %self.settings.logger.console.enabled,
            file_enabled = %self.settings.logger.file.enabled,
            "Logger configuration loaded"
        );
    }
}

/// Waits for a shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseBackend;

    fn memory_settings() -> Settings {
        let mut settings = Settings::default();
        settings.server.port = 0;
        settings.database.backend = DatabaseBackend::Memory;
        settings
    }

    #[tokio::test]
    async fn test_run_until_stops_on_shutdown() {
        let result = Server::new(memory_settings())
            .run_until(std::future::ready(()))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_database_aborts_startup() {
        let mut settings = memory_settings();
        settings.database.backend = DatabaseBackend::MongoDb;
        settings.database.uri = "mongodb://127.0.0.1:1".to_string();
        settings.database.connect_timeout = 1;

        let result = Server::new(settings)
            .run_until(std::future::ready(()))
            .await;
        assert!(matches!(result, Err(AppError::Unavailable { .. })));
    }

    #[tokio::test]
    async fn test_bind_failure_is_reported() {
        let occupied = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let mut settings = memory_settings();
        settings.server.port = occupied.local_addr().unwrap().port();

        let result = Server::new(settings)
            .run_until(std::future::ready(()))
            .await;
        assert!(matches!(result, Err(AppError::Internal { .. })));
    }
}
