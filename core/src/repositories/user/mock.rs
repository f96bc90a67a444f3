//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::{User, UserChanges};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::crud::CrudRepository;

use super::trait_::UserRepository;

/// Mock user repository for testing
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CrudRepository for MockUserRepository {
    type Entity = User;
    type Changes = UserChanges;

    async fn create(&self, user: User) -> DomainResult<User> {
        let mut users = self.users.write().await;

        // Check for duplicate email
        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::conflict("El email ya está registrado"));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_all(&self) -> DomainResult<Vec<User>> {
        let users = self.users.read().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn update(&self, id: Uuid, changes: UserChanges) -> DomainResult<Option<User>> {
        let mut users = self.users.write().await;
        let Some(current) = users.get(&id) else {
            return Ok(None);
        };

        if let Some(email) = &changes.email {
            if users.values().any(|u| u.id != id && &u.email == email) {
                return Err(DomainError::conflict("El email ya está registrado"));
            }
        }

        let updated = current.apply(&changes);
        users.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: Uuid) -> DomainResult<Option<User>> {
        let mut users = self.users.write().await;
        Ok(users.remove(&id))
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }
}
