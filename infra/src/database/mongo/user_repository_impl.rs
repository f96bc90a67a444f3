//! MongoDB implementation of the UserRepository trait.

use async_trait::async_trait;
use bson::doc;
use futures::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use uuid::Uuid;

use resto_core::domain::entities::{User, UserChanges};
use resto_core::errors::DomainResult;
use resto_core::repositories::{CrudRepository, UserRepository};

use super::documents::{id_filter, user_set, UserDocument};
use super::{store_error, write_error, USERS};

const DUPLICATE_EMAIL: &str = "El email ya está registrado";

/// MongoDB implementation of UserRepository
///
/// Stores the hash it is given in the `password` field; hashing happens in
/// the user service.
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(USERS),
        }
    }
}

#[async_trait]
impl CrudRepository for MongoUserRepository {
    type Entity = User;
    type Changes = UserChanges;

    async fn create(&self, user: User) -> DomainResult<User> {
        self.collection
            .insert_one(UserDocument::from(&user))
            .await
            .map_err(|e| write_error(e, "Failed to create user", DUPLICATE_EMAIL))?;

        Ok(user)
    }

    async fn find_all(&self) -> DomainResult<Vec<User>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "fechaCreacion": -1 })
            .await
            .map_err(|e| store_error(e, "Failed to list users"))?;

        let documents: Vec<UserDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| store_error(e, "Failed to collect users"))?;

        documents.into_iter().map(User::try_from).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        self.collection
            .find_one(id_filter(id))
            .await
            .map_err(|e| store_error(e, "Failed to get user"))?
            .map(User::try_from)
            .transpose()
    }

    async fn update(&self, id: Uuid, changes: UserChanges) -> DomainResult<Option<User>> {
        let set = user_set(&changes);
        if set.is_empty() {
            return self.find_by_id(id).await;
        }

        self.collection
            .find_one_and_update(id_filter(id), doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| write_error(e, "Failed to update user", DUPLICATE_EMAIL))?
            .map(User::try_from)
            .transpose()
    }

    async fn delete(&self, id: Uuid) -> DomainResult<Option<User>> {
        self.collection
            .find_one_and_delete(id_filter(id))
            .await
            .map_err(|e| store_error(e, "Failed to delete user"))?
            .map(User::try_from)
            .transpose()
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| store_error(e, "Failed to find user by email"))?
            .map(User::try_from)
            .transpose()
    }
}
