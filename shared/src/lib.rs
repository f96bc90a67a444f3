//! Shared utilities and common types for the restaurant backend
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types read from the process environment
//! - Wire response structures
//! - Validation patterns shared by the domain and API layers

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, Environment, SecurityConfig, ServerConfig};
pub use types::{ErrorResponse, HealthResponse, MessageResponse};
pub use utils::validation;
