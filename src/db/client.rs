//! Document store connection lifecycle.
//!
//! The store is connected once at startup and shut down explicitly when the
//! server stops. Handlers only ever see the collection handle.

use std::sync::Arc;
use std::time::Duration;

use mongodb::Client;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;

use crate::config::settings::{DatabaseBackend, DatabaseConfig};
use crate::db::{InMemoryUserCollection, MongoUserCollection, UserCollection};
use crate::error::{AppError, AppResult, DatabaseErrorConverter};
use crate::models::User;

/// Connected document store.
///
/// Holds the driver client (if any) so it can be shut down, and the shared
/// user collection handed to the repositories.
pub struct Database {
    client: Option<Client>,
    users: Arc<dyn UserCollection>,
}

impl Database {
    /// Connects to the backend selected in `config`.
    ///
    /// For MongoDB this parses the URI, builds the client and pings the
    /// server so that a bad URI or an unreachable server fails at startup
    /// rather than on the first request.
    ///
    /// # Errors
    ///
    /// - `AppError::Configuration` - If the connection URI cannot be parsed
    /// - `AppError::Unavailable` - If the server does not answer the ping
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.backend {
            DatabaseBackend::MongoDb => Self::connect_mongodb(config).await,
            DatabaseBackend::Memory => {
                tracing::warn!("Using in-memory user store; data is lost on shutdown");
                Ok(Self::in_memory())
            }
        }
    }

    /// A store that lives entirely in this process.
    pub fn in_memory() -> Self {
        Self {
            client: None,
            users: Arc::new(InMemoryUserCollection::new()),
        }
    }

    async fn connect_mongodb(config: &DatabaseConfig) -> AppResult<Self> {
        let mut options =
            ClientOptions::parse(&config.uri)
                .await
                .map_err(|e| AppError::Configuration {
                    key: "database.uri".to_string(),
                    source: anyhow::Error::from(e),
                })?;
        options.app_name = Some(crate::pkg_name().to_string());
        options.max_pool_size = Some(config.max_pool_size);
        options.connect_timeout = Some(Duration::from_secs(config.connect_timeout));
        options.server_selection_timeout = Some(Duration::from_secs(config.connect_timeout));

        let client = Client::with_options(options).map_err(|e| AppError::Configuration {
            key: "database.uri".to_string(),
            source: anyhow::Error::from(e),
        })?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| DatabaseErrorConverter::convert_mongo_error(e, "ping"))?;

        let collection = client
            .database(&config.name)
            .collection::<User>(&config.collection);
        let users = MongoUserCollection::new(collection);

        tracing::info!(
            database = %config.name,
            collection = %users.name(),
            "Connected to MongoDB"
        );

        Ok(Self {
            client: Some(client),
            users: Arc::new(users),
        })
    }

    /// Shared handle to the user collection.
    pub fn users(&self) -> Arc<dyn UserCollection> {
        Arc::clone(&self.users)
    }

    /// Closes the driver's connections. No-op for the in-memory backend.
    pub async fn shutdown(self) {
        if let Some(client) = self.client {
            client.shutdown().await;
            tracing::info!("MongoDB client shut down");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::UserFilter;
    use crate::models::NewUser;

    #[tokio::test]
    async fn test_memory_backend_connects_without_server() {
        let config = DatabaseConfig {
            backend: DatabaseBackend::Memory,
            ..Default::default()
        };
        let database = Database::connect(&config).await.unwrap();
        assert!(database.users().find_all().await.unwrap().is_empty());
        database.shutdown().await;
    }

    #[tokio::test]
    async fn test_users_handle_is_shared() {
        let database = Database::in_memory();
        let id = database
            .users()
            .insert_one(&NewUser {
                name: "Bob".to_string(),
                email: "bob@email.com".to_string(),
            })
            .await
            .unwrap();

        let found = database.users().find_one(UserFilter::ById(id)).await.unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn test_invalid_uri_is_configuration_error() {
        let config = DatabaseConfig {
            uri: "not-a-mongodb-uri".to_string(),
            ..Default::default()
        };
        let err = Database::connect(&config).await.err().unwrap();
        assert!(matches!(err, AppError::Configuration { key, .. } if key == "database.uri"));
    }
}
