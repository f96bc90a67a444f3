//! Client service implementation

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::client::{Client, ClientUpdate, NewClient};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::ClientRepository;

const DUPLICATE_DOCUMENT: &str = "El documento ya está registrado";
const DOCUMENT_OF_OTHER_CLIENT: &str = "El documento ya está registrado en otro cliente";
const SEARCH_TERM_REQUIRED: &str = "Parámetro nombre es requerido";

/// Service for client registration and lookups
///
/// The document pre-checks give a precise message before the write. The
/// store's unique index still decides a race between two concurrent
/// writers; the repository reports that case with the same conflict.
pub struct ClientService<C>
where
    C: ClientRepository,
{
    client_repository: Arc<C>,
}

impl<C> ClientService<C>
where
    C: ClientRepository,
{
    pub fn new(client_repository: Arc<C>) -> Self {
        Self { client_repository }
    }

    /// Register a client with a document nobody else holds
    pub async fn create(&self, input: NewClient) -> DomainResult<Client> {
        let input = input.normalized();
        input.validate_client()?;

        if self
            .client_repository
            .find_by_document(&input.document)
            .await?
            .is_some()
        {
            tracing::warn!(event = "duplicate_document", "Client document already registered");
            return Err(DomainError::conflict(DUPLICATE_DOCUMENT));
        }

        let client = self.client_repository.create(Client::create(input)).await?;
        tracing::info!(client_id = %client.id, event = "client_created", "Client created");

        Ok(client)
    }

    /// All clients, most recently registered first
    pub async fn list(&self) -> DomainResult<Vec<Client>> {
        self.client_repository.find_all().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> DomainResult<Option<Client>> {
        self.client_repository.find_by_id(id).await
    }

    /// Apply a partial update
    ///
    /// A new document is accepted when it is free or already belongs to
    /// this same client.
    pub async fn update(&self, id: Uuid, update: ClientUpdate) -> DomainResult<Option<Client>> {
        let update = update.normalized();
        update.validate_changes()?;

        if let Some(document) = &update.document {
            let holder = self.client_repository.find_by_document(document).await?;
            if holder.is_some_and(|other| other.id != id) {
                return Err(DomainError::conflict(DOCUMENT_OF_OTHER_CLIENT));
            }
        }

        if update.is_empty() {
            return self.client_repository.find_by_id(id).await;
        }

        let updated = self.client_repository.update(id, update).await?;
        if updated.is_some() {
            tracing::info!(client_id = %id, event = "client_updated", "Client updated");
        }
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<Option<Client>> {
        let deleted = self.client_repository.delete(id).await?;
        if deleted.is_some() {
            tracing::info!(client_id = %id, event = "client_deleted", "Client deleted");
        }
        Ok(deleted)
    }

    /// Text search over full names, best match first
    pub async fn search_by_name(&self, term: &str) -> DomainResult<Vec<Client>> {
        let term = term.trim();
        if term.is_empty() {
            return Err(DomainError::validation(SEARCH_TERM_REQUIRED));
        }

        let results = self.client_repository.search_by_name(term).await?;
        tracing::debug!(results = results.len(), "Client name search");
        Ok(results)
    }

    pub async fn get_by_document(&self, document: &str) -> DomainResult<Option<Client>> {
        self.client_repository.find_by_document(document.trim()).await
    }
}
