//! Database configuration module

use serde::{Deserialize, Serialize};

/// MongoDB connection configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Connection string (`MONGODB_URI`)
    pub uri: String,

    /// Database holding the `pedidos`, `clientes` and `usuarios` collections
    pub database: String,

    /// Server selection / connect timeout in seconds
    pub connect_timeout: u64,

    /// Application name reported to the server
    #[serde(default = "default_app_name")]
    pub app_name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: String::from("mongodb://localhost:27017"),
            database: String::from("restaurante"),
            connect_timeout: 10,
            app_name: default_app_name(),
        }
    }
}

impl DatabaseConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let uri = std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let database = std::env::var("MONGODB_DATABASE")
            .unwrap_or_else(|_| "restaurante".to_string());
        let connect_timeout = std::env::var("MONGODB_CONNECT_TIMEOUT")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10);

        Self {
            uri,
            database,
            connect_timeout,
            ..Default::default()
        }
    }

    /// Create a new database configuration with a connection string
    pub fn new(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
            ..Default::default()
        }
    }

    /// Set the connect timeout
    pub fn with_connect_timeout(mut self, seconds: u64) -> Self {
        self.connect_timeout = seconds;
        self
    }
}

fn default_app_name() -> String {
    String::from("pedidos-api")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides() {
        let config = DatabaseConfig::new("mongodb://db:27017", "pedidos_test")
            .with_connect_timeout(3);

        assert_eq!(config.uri, "mongodb://db:27017");
        assert_eq!(config.database, "pedidos_test");
        assert_eq!(config.connect_timeout, 3);
        assert_eq!(config.app_name, "pedidos-api");
    }
}
