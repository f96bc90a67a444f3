//! In-memory OrderRepository for tests and local wiring

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::order::{Order, OrderChanges};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::crud::CrudRepository;

use super::trait_::OrderRepository;

/// Mock order repository
///
/// Can be switched to an unavailable state in which every call fails the
/// way an unreachable store would.
pub struct MockOrderRepository {
    orders: Arc<RwLock<HashMap<Uuid, Order>>>,
    unavailable: AtomicBool,
}

impl MockOrderRepository {
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(HashMap::new())),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Make every subsequent call fail with a database error
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> DomainResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::database("connection refused"));
        }
        Ok(())
    }
}

impl Default for MockOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CrudRepository for MockOrderRepository {
    type Entity = Order;
    type Changes = OrderChanges;

    async fn create(&self, order: Order) -> DomainResult<Order> {
        self.check_available()?;
        let mut orders = self.orders.write().await;
        orders.insert(order.id, order.clone());
        Ok(order)
    }

    async fn find_all(&self) -> DomainResult<Vec<Order>> {
        self.check_available()?;
        let orders = self.orders.read().await;
        let mut all: Vec<Order> = orders.values().cloned().collect();
        all.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(all)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Order>> {
        self.check_available()?;
        let orders = self.orders.read().await;
        Ok(orders.get(&id).cloned())
    }

    async fn update(&self, id: Uuid, changes: OrderChanges) -> DomainResult<Option<Order>> {
        self.check_available()?;
        let mut orders = self.orders.write().await;
        let Some(current) = orders.get(&id) else {
            return Ok(None);
        };

        let updated = current.apply(&changes);
        orders.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: Uuid) -> DomainResult<Option<Order>> {
        self.check_available()?;
        let mut orders = self.orders.write().await;
        Ok(orders.remove(&id))
    }
}

impl OrderRepository for MockOrderRepository {}
