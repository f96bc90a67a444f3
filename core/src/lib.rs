//! # Restaurant Core
//!
//! Core business logic and domain layer for the restaurant backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::parse_id;
pub use errors::{DomainError, DomainResult, ValidationError};
pub use repositories::{ClientRepository, CrudRepository, OrderRepository, UserRepository};
pub use services::{ClientService, OrderService, PasswordHasher, UserService};
