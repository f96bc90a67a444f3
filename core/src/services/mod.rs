//! Business services containing the use cases of each entity.

pub mod client;
pub mod order;
pub mod user;

// Re-export commonly used types
pub use client::ClientService;
pub use order::OrderService;
pub use user::{MockPasswordHasher, PasswordHasher, UserService};
