//! Unit tests for mock order repository

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::order::{NewOrder, Order, OrderChanges, OrderItem};
use crate::errors::DomainError;
use crate::repositories::order::MockOrderRepository;
use crate::repositories::CrudRepository;

fn order_at(client_name: &str, days_ago: i64) -> Order {
    Order::create(NewOrder {
        client_name: client_name.to_string(),
        phone: "555-0000".to_string(),
        date: Some(Utc::now() - Duration::days(days_ago)),
        items: vec![OrderItem::new("Taco", 2, 30.0)],
        ..Default::default()
    })
}

#[tokio::test]
async fn test_create_and_find() {
    let repo = MockOrderRepository::new();
    let order = order_at("Ana", 0);

    let created = repo.create(order.clone()).await.unwrap();
    assert_eq!(created, order);

    let found = repo.find_by_id(order.id).await.unwrap();
    assert_eq!(found, Some(order));
    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_all_newest_first() {
    let repo = MockOrderRepository::new();
    repo.create(order_at("Viejo", 3)).await.unwrap();
    repo.create(order_at("Nuevo", 0)).await.unwrap();
    repo.create(order_at("Medio", 1)).await.unwrap();

    let names: Vec<String> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.client_name)
        .collect();
    assert_eq!(names, vec!["Nuevo", "Medio", "Viejo"]);
}

#[tokio::test]
async fn test_update_missing_returns_none() {
    let repo = MockOrderRepository::new();
    let result = repo
        .update(Uuid::new_v4(), OrderChanges::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_update_applies_changes() {
    let repo = MockOrderRepository::new();
    let order = repo.create(order_at("Ana", 0)).await.unwrap();

    let changes = OrderChanges {
        phone: Some("555-1111".to_string()),
        ..Default::default()
    };
    let updated = repo.update(order.id, changes).await.unwrap().unwrap();

    assert_eq!(updated.phone, "555-1111");
    assert_eq!(updated.total, order.total);
}

#[tokio::test]
async fn test_delete_twice() {
    let repo = MockOrderRepository::new();
    let order = repo.create(order_at("Ana", 0)).await.unwrap();

    assert_eq!(repo.delete(order.id).await.unwrap().map(|o| o.id), Some(order.id));
    assert!(repo.delete(order.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_unavailable_store() {
    let repo = MockOrderRepository::new();
    repo.set_unavailable(true);

    let result = repo.find_all().await;
    assert!(matches!(result, Err(DomainError::Database { .. })));

    repo.set_unavailable(false);
    assert!(repo.find_all().await.unwrap().is_empty());
}
