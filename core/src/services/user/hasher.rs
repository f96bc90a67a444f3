//! Password hashing seam.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::DomainResult;

/// One-way salted password hashing
///
/// The user service calls this explicitly before every write that carries a
/// new password. Implementations may block, so they are expected to move
/// the work off the async executor.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password
    async fn hash(&self, password: &str) -> DomainResult<String>;

    /// Check a plaintext password against a stored hash
    async fn verify(&self, password: &str, hash: &str) -> DomainResult<bool>;
}

/// Fast, non-cryptographic hasher for tests
///
/// Produces `hashed:<password>` and counts how often `verify` is called.
#[derive(Debug, Default)]
pub struct MockPasswordHasher {
    verify_calls: AtomicUsize,
}

impl MockPasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verify_calls(&self) -> usize {
        self.verify_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PasswordHasher for MockPasswordHasher {
    async fn hash(&self, password: &str) -> DomainResult<String> {
        Ok(format!("hashed:{}", password))
    }

    async fn verify(&self, password: &str, hash: &str) -> DomainResult<bool> {
        self.verify_calls.fetch_add(1, Ordering::SeqCst);
        Ok(hash == format!("hashed:{}", password))
    }
}
