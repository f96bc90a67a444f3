//! Configuration module
//!
//! Every section reads its values from the process environment (after
//! `.env` has been loaded by the binary):
//! - `database` - MongoDB connection string and database name
//! - `environment` - deployment environment and default log filter
//! - `security` - password hashing cost
//! - `server` - HTTP bind address

pub mod database;
pub mod environment;
pub mod security;
pub mod server;

use serde::{Deserialize, Serialize};

pub use database::DatabaseConfig;
pub use environment::Environment;
pub use security::SecurityConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Password hashing configuration
    pub security: SecurityConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            security: SecurityConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            security: SecurityConfig::from_env(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
