//! bcrypt implementation of the PasswordHasher seam.

use async_trait::async_trait;

use resto_core::errors::{DomainError, DomainResult};
use resto_core::services::PasswordHasher;
use resto_shared::SecurityConfig;

use crate::InfrastructureError;

/// Salted bcrypt hashing on the blocking thread pool
#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn from_config(config: &SecurityConfig) -> Self {
        Self::new(config.bcrypt_cost)
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

fn join_error(error: tokio::task::JoinError) -> DomainError {
    DomainError::Internal {
        message: format!("Hashing task failed: {}", error),
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, password: &str) -> DomainResult<String> {
        let password = password.to_owned();
        let cost = self.cost;

        let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(join_error)?
            .map_err(InfrastructureError::from)?;

        Ok(hashed)
    }

    async fn verify(&self, password: &str, hash: &str) -> DomainResult<bool> {
        let password = password.to_owned();
        let hash = hash.to_owned();

        let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(join_error)?
            .map_err(InfrastructureError::from)?;

        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hasher = BcryptPasswordHasher::new(4);

        let hash = hasher.hash("password123").await.unwrap();
        assert_ne!(hash, "password123");
        assert!(hash.starts_with("$2"));

        assert!(hasher.verify("password123", &hash).await.unwrap());
        assert!(!hasher.verify("otra-clave", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_hash_is_salted() {
        let hasher = BcryptPasswordHasher::new(4);

        let first = hasher.hash("secreto").await.unwrap();
        let second = hasher.hash("secreto").await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_malformed_hash_is_an_error() {
        let hasher = BcryptPasswordHasher::new(4);
        let result = hasher.verify("secreto", "not-a-bcrypt-hash").await;
        assert!(matches!(result, Err(DomainError::Internal { .. })));
    }

    #[test]
    fn test_from_config() {
        let hasher = BcryptPasswordHasher::from_config(&SecurityConfig { bcrypt_cost: 10 });
        assert_eq!(hasher.cost(), 10);
    }
}
