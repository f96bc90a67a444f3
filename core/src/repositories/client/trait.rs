//! Client repository trait defining the lookups beyond plain CRUD.

use async_trait::async_trait;

use crate::domain::entities::client::{Client, ClientUpdate};
use crate::errors::DomainResult;
use crate::repositories::crud::CrudRepository;

/// Persistence for clients
///
/// Implementations must enforce uniqueness of `document`: a `create` or
/// `update` that would produce two clients with the same document fails
/// with `DomainError::Conflict`. `find_all` returns clients by
/// registration date descending.
#[async_trait]
pub trait ClientRepository: CrudRepository<Entity = Client, Changes = ClientUpdate> {
    /// Find the client holding an identity document number
    async fn find_by_document(&self, document: &str) -> DomainResult<Option<Client>>;

    /// Full-text search on the client's full name
    ///
    /// # Returns
    /// Matching clients ordered by relevance, best match first. An empty
    /// vector when nothing matches.
    async fn search_by_name(&self, term: &str) -> DomainResult<Vec<Client>>;
}
