//! MongoDB client management
//!
//! This module builds the driver client from configuration, verifies the
//! server is reachable, creates the indexes the repositories rely on, and
//! closes the client on shutdown.

use std::time::Duration;

use bson::{doc, Document};
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Database, IndexModel};

use resto_shared::DatabaseConfig;

use super::mongo::{CLIENTS, ORDERS, USERS};
use crate::InfrastructureError;

/// Database handle wrapper
///
/// Built once at startup and shared by every repository. Cloning is cheap;
/// clones share the driver's connection pool.
#[derive(Clone, Debug)]
pub struct MongoDatabase {
    /// Driver client owning the connection pool
    client: Client,
    /// Handle to the configured database
    database: Database,
    /// Configuration used to create this handle
    config: DatabaseConfig,
}

impl MongoDatabase {
    /// Connect and ping the server
    ///
    /// # Arguments
    /// * `config` - Database configuration settings
    ///
    /// # Returns
    /// * `Result<Self, InfrastructureError>` - Ready handle, or an error when the
    ///   URI is malformed or the server cannot be reached within the timeout
    ///
    /// # Example
    /// ```no_run
    /// use resto_infra::MongoDatabase;
    /// use resto_shared::DatabaseConfig;
    ///
    /// async fn connect() -> Result<MongoDatabase, Box<dyn std::error::Error>> {
    ///     let config = DatabaseConfig::new("mongodb://localhost:27017", "restaurante");
    ///     Ok(MongoDatabase::connect(config).await?)
    /// }
    /// ```
    pub async fn connect(config: DatabaseConfig) -> Result<Self, InfrastructureError> {
        tracing::info!(
            database = %config.database,
            connect_timeout = config.connect_timeout,
            "Connecting to MongoDB"
        );

        let mut options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| InfrastructureError::Config(format!("Invalid MongoDB URI: {}", e)))?;

        let timeout = Duration::from_secs(config.connect_timeout);
        options.app_name = Some(config.app_name.clone());
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);

        let client = Client::with_options(options)?;
        let database = client.database(&config.database);

        let handle = Self {
            client,
            database,
            config,
        };

        handle.ping().await.map_err(|e| {
            tracing::error!("Failed to reach MongoDB: {}", e);
            e
        })?;

        tracing::info!("MongoDB connection established");
        Ok(handle)
    }

    /// Get a reference to the underlying database
    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Check if the server answers a ping
    ///
    /// # Returns
    /// * `Result<bool, InfrastructureError>` - True if healthy, error otherwise
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        tracing::debug!("Performing database health check");
        self.ping().await?;
        tracing::debug!("Database health check passed");
        Ok(true)
    }

    /// Create the indexes the repositories depend on
    ///
    /// - unique `clientes.documento`
    /// - text `clientes.nombreCompleto`
    /// - unique `usuarios.email`
    /// - `pedidos.fecha` for newest-first listing
    ///
    /// Creating an index that already exists with the same definition is a
    /// no-op, so this is safe to run on every start.
    pub async fn ensure_indexes(&self) -> Result<(), InfrastructureError> {
        tracing::info!("Ensuring database indexes");

        let unique = |name: &str| IndexOptions::builder().unique(true).name(name.to_string()).build();
        let named = |name: &str| IndexOptions::builder().name(name.to_string()).build();

        self.database
            .collection::<Document>(CLIENTS)
            .create_indexes(vec![
                IndexModel::builder()
                    .keys(doc! { "documento": 1 })
                    .options(unique("documento_unique"))
                    .build(),
                IndexModel::builder()
                    .keys(doc! { "nombreCompleto": "text" })
                    .options(named("nombreCompleto_text"))
                    .build(),
            ])
            .await?;

        self.database
            .collection::<Document>(USERS)
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "email": 1 })
                    .options(unique("email_unique"))
                    .build(),
            )
            .await?;

        self.database
            .collection::<Document>(ORDERS)
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "fecha": -1 })
                    .options(named("fecha_desc"))
                    .build(),
            )
            .await?;

        tracing::info!("Database indexes ready");
        Ok(())
    }

    /// Shut the client down, waiting for in-flight operations
    ///
    /// This should be called during application shutdown.
    pub async fn close(&self) {
        tracing::info!("Closing MongoDB client");
        self.client.clone().shutdown().await;
        tracing::info!("MongoDB client closed");
    }

    async fn ping(&self) -> Result<(), InfrastructureError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
