//! MongoDB implementation of the ClientRepository trait.
//!
//! Relies on the unique index on `documento` and the text index on
//! `nombreCompleto` created by `MongoDatabase::ensure_indexes`.

use async_trait::async_trait;
use bson::doc;
use futures::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use uuid::Uuid;

use resto_core::domain::entities::{Client, ClientUpdate};
use resto_core::errors::DomainResult;
use resto_core::repositories::{ClientRepository, CrudRepository};

use super::documents::{client_set, id_filter, ClientDocument};
use super::{store_error, write_error, CLIENTS};

/// MongoDB implementation of ClientRepository
#[derive(Clone)]
pub struct MongoClientRepository {
    collection: Collection<ClientDocument>,
}

impl MongoClientRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(CLIENTS),
        }
    }

    async fn collect_clients(&self, cursor: mongodb::Cursor<ClientDocument>) -> DomainResult<Vec<Client>> {
        let documents: Vec<ClientDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| store_error(e, "Failed to collect clients"))?;

        documents.into_iter().map(Client::try_from).collect()
    }
}

#[async_trait]
impl CrudRepository for MongoClientRepository {
    type Entity = Client;
    type Changes = ClientUpdate;

    async fn create(&self, client: Client) -> DomainResult<Client> {
        self.collection
            .insert_one(ClientDocument::from(&client))
            .await
            .map_err(|e| {
                write_error(e, "Failed to create client", "El documento ya está registrado")
            })?;

        Ok(client)
    }

    async fn find_all(&self) -> DomainResult<Vec<Client>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "fechaRegistro": -1 })
            .await
            .map_err(|e| store_error(e, "Failed to list clients"))?;

        self.collect_clients(cursor).await
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Client>> {
        self.collection
            .find_one(id_filter(id))
            .await
            .map_err(|e| store_error(e, "Failed to get client"))?
            .map(Client::try_from)
            .transpose()
    }

    async fn update(&self, id: Uuid, changes: ClientUpdate) -> DomainResult<Option<Client>> {
        let set = client_set(&changes);
        if set.is_empty() {
            return self.find_by_id(id).await;
        }

        self.collection
            .find_one_and_update(id_filter(id), doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| {
                write_error(
                    e,
                    "Failed to update client",
                    "El documento ya está registrado en otro cliente",
                )
            })?
            .map(Client::try_from)
            .transpose()
    }

    async fn delete(&self, id: Uuid) -> DomainResult<Option<Client>> {
        self.collection
            .find_one_and_delete(id_filter(id))
            .await
            .map_err(|e| store_error(e, "Failed to delete client"))?
            .map(Client::try_from)
            .transpose()
    }
}

#[async_trait]
impl ClientRepository for MongoClientRepository {
    async fn find_by_document(&self, document: &str) -> DomainResult<Option<Client>> {
        self.collection
            .find_one(doc! { "documento": document })
            .await
            .map_err(|e| store_error(e, "Failed to find client by document"))?
            .map(Client::try_from)
            .transpose()
    }

    async fn search_by_name(&self, term: &str) -> DomainResult<Vec<Client>> {
        let cursor = self
            .collection
            .find(doc! { "$text": { "$search": term } })
            .sort(doc! { "score": { "$meta": "textScore" } })
            .await
            .map_err(|e| store_error(e, "Failed to search clients"))?;

        self.collect_clients(cursor).await
    }
}
