//! API configuration
//!
//! Process-level settings come from `resto_shared::AppConfig`; this module
//! only adds what the HTTP layer decides on its own.

use resto_shared::{AppConfig, Environment};

/// Error response configuration options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorConfig {
    /// Return store and internal error messages to the client. When false a
    /// generic message is sent and the detail only goes to the log.
    pub expose_internal: bool,
}

impl Default for ErrorConfig {
    fn default() -> Self {
        Self {
            expose_internal: true,
        }
    }
}

impl ErrorConfig {
    /// Create production configuration
    pub fn production() -> Self {
        Self {
            expose_internal: false,
        }
    }

    pub fn for_environment(environment: Environment) -> Self {
        Self {
            expose_internal: environment.expose_internal_errors(),
        }
    }
}

/// Load `.env` if present, then read the configuration from the environment
pub fn load() -> AppConfig {
    dotenvy::dotenv().ok();
    AppConfig::from_env()
}
