//! Database module - MongoDB implementations
//!
//! This module provides database access layer implementations including:
//! - Client handle management and index setup
//! - Repository pattern implementations for orders, clients and users

pub mod connection;
pub mod mongo;


// Re-export commonly used types
pub use connection::MongoDatabase;
pub use mongo::{MongoClientRepository, MongoOrderRepository, MongoUserRepository};
