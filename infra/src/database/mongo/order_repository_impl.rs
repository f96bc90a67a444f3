//! MongoDB implementation of the OrderRepository trait.

use async_trait::async_trait;
use bson::doc;
use futures::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use uuid::Uuid;

use resto_core::domain::entities::{Order, OrderChanges};
use resto_core::errors::DomainResult;
use resto_core::repositories::{CrudRepository, OrderRepository};

use super::documents::{id_filter, order_set, OrderDocument};
use super::{store_error, ORDERS};

/// MongoDB implementation of OrderRepository
#[derive(Clone)]
pub struct MongoOrderRepository {
    collection: Collection<OrderDocument>,
}

impl MongoOrderRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(ORDERS),
        }
    }
}

#[async_trait]
impl CrudRepository for MongoOrderRepository {
    type Entity = Order;
    type Changes = OrderChanges;

    async fn create(&self, order: Order) -> DomainResult<Order> {
        self.collection
            .insert_one(OrderDocument::from(&order))
            .await
            .map_err(|e| store_error(e, "Failed to create order"))?;

        Ok(order)
    }

    async fn find_all(&self) -> DomainResult<Vec<Order>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "fecha": -1 })
            .await
            .map_err(|e| store_error(e, "Failed to list orders"))?;

        let documents: Vec<OrderDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| store_error(e, "Failed to collect orders"))?;

        documents.into_iter().map(Order::try_from).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Order>> {
        self.collection
            .find_one(id_filter(id))
            .await
            .map_err(|e| store_error(e, "Failed to get order"))?
            .map(Order::try_from)
            .transpose()
    }

    async fn update(&self, id: Uuid, changes: OrderChanges) -> DomainResult<Option<Order>> {
        let set = order_set(&changes)?;
        if set.is_empty() {
            return self.find_by_id(id).await;
        }

        self.collection
            .find_one_and_update(id_filter(id), doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| store_error(e, "Failed to update order"))?
            .map(Order::try_from)
            .transpose()
    }

    async fn delete(&self, id: Uuid) -> DomainResult<Option<Order>> {
        self.collection
            .find_one_and_delete(id_filter(id))
            .await
            .map_err(|e| store_error(e, "Failed to delete order"))?
            .map(Order::try_from)
            .transpose()
    }
}

impl OrderRepository for MongoOrderRepository {}
