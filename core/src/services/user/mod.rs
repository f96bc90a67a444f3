//! Staff account use cases
//!
//! This module provides:
//! - Account registration with a unique email and a hashed password
//! - Partial updates that re-hash only when a new password is supplied
//! - Credential checks for login

mod hasher;
mod service;

#[cfg(test)]
mod tests;

pub use hasher::{MockPasswordHasher, PasswordHasher};
pub use service::UserService;
