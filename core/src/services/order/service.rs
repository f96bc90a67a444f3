//! Order service implementation

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::order::{NewOrder, Order, OrderChanges, OrderUpdate};
use crate::errors::DomainResult;
use crate::repositories::OrderRepository;

/// Service handling order submission and maintenance
pub struct OrderService<O>
where
    O: OrderRepository,
{
    /// Order repository for database operations
    order_repository: Arc<O>,
}

impl<O> OrderService<O>
where
    O: OrderRepository,
{
    pub fn new(order_repository: Arc<O>) -> Self {
        Self { order_repository }
    }

    /// Submit a new order
    ///
    /// The total is always computed from the items. Any total the caller
    /// sent is ignored.
    ///
    /// # Returns
    ///
    /// * `Ok(Order)` - The stored order
    /// * `Err(DomainError)` - Invalid input or store failure
    pub async fn create(&self, input: NewOrder) -> DomainResult<Order> {
        let input = input.normalized();
        input.validate_order()?;

        let order = self.order_repository.create(Order::create(input)).await?;

        tracing::info!(
            order_id = %order.id,
            items = order.items.len(),
            total = order.total,
            event = "order_created",
            "Order created"
        );

        Ok(order)
    }

    /// All orders, most recent first
    pub async fn list(&self) -> DomainResult<Vec<Order>> {
        self.order_repository.find_all().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> DomainResult<Option<Order>> {
        self.order_repository.find_by_id(id).await
    }

    /// Apply a partial update
    ///
    /// When the update carries items the total is recomputed from them;
    /// otherwise the stored total is kept. The delivery rule is checked on
    /// the stored order merged with the changes, so switching an order to
    /// delivery without an address on file is rejected.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Order))` - The updated order
    /// * `Ok(None)` - No order with that id
    pub async fn update(&self, id: Uuid, update: OrderUpdate) -> DomainResult<Option<Order>> {
        let update = update.normalized();
        update.validate_changes()?;
        let changes = OrderChanges::from(update);

        let Some(current) = self.order_repository.find_by_id(id).await? else {
            return Ok(None);
        };

        if changes.is_empty() {
            return Ok(Some(current));
        }

        current.apply(&changes).check_delivery()?;

        let updated = self.order_repository.update(id, changes).await?;
        if let Some(order) = &updated {
            tracing::info!(
                order_id = %order.id,
                total = order.total,
                event = "order_updated",
                "Order updated"
            );
        }

        Ok(updated)
    }

    /// Remove an order, returning it when it existed
    pub async fn delete(&self, id: Uuid) -> DomainResult<Option<Order>> {
        let deleted = self.order_repository.delete(id).await?;
        if deleted.is_some() {
            tracing::info!(order_id = %id, event = "order_deleted", "Order deleted");
        }
        Ok(deleted)
    }
}
