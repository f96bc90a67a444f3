//! CRUD capability set shared by every entity repository.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::DomainResult;

/// Basic persistence operations for one entity type
///
/// A missing record is never an error: lookups, updates and deletes report
/// it as `Ok(None)`. Store failures surface as `DomainError::Database` and
/// unique-key violations as `DomainError::Conflict`.
#[async_trait]
pub trait CrudRepository: Send + Sync {
    /// The persisted entity
    type Entity: Send + Sync;

    /// Partial change set accepted by [`CrudRepository::update`]
    type Changes: Send + Sync;

    /// Insert a new entity and return it as stored
    async fn create(&self, entity: Self::Entity) -> DomainResult<Self::Entity>;

    /// All entities, newest first
    async fn find_all(&self) -> DomainResult<Vec<Self::Entity>>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Self::Entity>>;

    /// Apply `changes` to the entity with `id` and return the updated entity
    async fn update(&self, id: Uuid, changes: Self::Changes) -> DomainResult<Option<Self::Entity>>;

    /// Remove the entity with `id` and return what was removed
    async fn delete(&self, id: Uuid) -> DomainResult<Option<Self::Entity>>;
}
