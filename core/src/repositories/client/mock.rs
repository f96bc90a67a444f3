//! Mock implementation of ClientRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::client::{Client, ClientUpdate};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::crud::CrudRepository;

use super::trait_::ClientRepository;

/// Mock client repository
///
/// Enforces the unique document the way a unique index would and ranks
/// name searches by the number of matching words.
pub struct MockClientRepository {
    clients: Arc<RwLock<HashMap<Uuid, Client>>>,
}

impl MockClientRepository {
    pub fn new() -> Self {
        Self {
            clients: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockClientRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of search words found among the words of `name`
fn relevance(name: &str, words: &[String]) -> usize {
    let name_words: Vec<String> = name.split_whitespace().map(str::to_lowercase).collect();
    words.iter().filter(|w| name_words.contains(w)).count()
}

#[async_trait]
impl CrudRepository for MockClientRepository {
    type Entity = Client;
    type Changes = ClientUpdate;

    async fn create(&self, client: Client) -> DomainResult<Client> {
        let mut clients = self.clients.write().await;

        if clients.values().any(|c| c.document == client.document) {
            return Err(DomainError::conflict("El documento ya está registrado"));
        }

        clients.insert(client.id, client.clone());
        Ok(client)
    }

    async fn find_all(&self) -> DomainResult<Vec<Client>> {
        let clients = self.clients.read().await;
        let mut all: Vec<Client> = clients.values().cloned().collect();
        all.sort_by(|a, b| b.registered_at.cmp(&a.registered_at));
        Ok(all)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Client>> {
        let clients = self.clients.read().await;
        Ok(clients.get(&id).cloned())
    }

    async fn update(&self, id: Uuid, changes: ClientUpdate) -> DomainResult<Option<Client>> {
        let mut clients = self.clients.write().await;
        let Some(current) = clients.get(&id) else {
            return Ok(None);
        };

        if let Some(document) = &changes.document {
            if clients.values().any(|c| c.id != id && &c.document == document) {
                return Err(DomainError::conflict(
                    "El documento ya está registrado en otro cliente",
                ));
            }
        }

        let updated = current.apply(&changes);
        clients.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: Uuid) -> DomainResult<Option<Client>> {
        let mut clients = self.clients.write().await;
        Ok(clients.remove(&id))
    }
}

#[async_trait]
impl ClientRepository for MockClientRepository {
    async fn find_by_document(&self, document: &str) -> DomainResult<Option<Client>> {
        let clients = self.clients.read().await;
        Ok(clients.values().find(|c| c.document == document).cloned())
    }

    async fn search_by_name(&self, term: &str) -> DomainResult<Vec<Client>> {
        let words: Vec<String> = term.split_whitespace().map(str::to_lowercase).collect();
        let clients = self.clients.read().await;

        let mut scored: Vec<(usize, Client)> = clients
            .values()
            .map(|c| (relevance(&c.full_name, &words), c.clone()))
            .filter(|(score, _)| *score > 0)
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.full_name.cmp(&b.1.full_name)));

        Ok(scored.into_iter().map(|(_, c)| c).collect())
    }
}
