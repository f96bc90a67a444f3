//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the restaurant backend.
//! It provides concrete implementations for the repository and hashing
//! seams declared in `resto_core`.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MongoDB connection handle and one repository per collection
//! - **Security**: bcrypt implementation of the password hasher

use resto_core::errors::DomainError;

/// Database module - MongoDB implementations
pub mod database;

/// Security module - password hashing
pub mod security;

pub use database::{MongoClientRepository, MongoDatabase, MongoOrderRepository, MongoUserRepository};
pub use security::BcryptPasswordHasher;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Driver or server error
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Password hashing error
    #[error("Hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        match error {
            InfrastructureError::Database(e) => DomainError::database(e),
            other => DomainError::Internal {
                message: other.to_string(),
            },
        }
    }
}
