//! User repository trait.

use async_trait::async_trait;

use crate::domain::entities::user::{User, UserChanges};
use crate::errors::DomainResult;
use crate::repositories::crud::CrudRepository;

/// Persistence for staff accounts
///
/// The repository stores whatever hash it is handed and never hashes by
/// itself. Emails are unique; a duplicate fails with
/// `DomainError::Conflict`. `find_all` returns users by creation date
/// descending.
#[async_trait]
pub trait UserRepository: CrudRepository<Entity = User, Changes = UserChanges> {
    /// Find a user by normalized (lowercase) email
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;
}
