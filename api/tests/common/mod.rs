//! Shared setup for the HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;

use resto_api::config::ErrorConfig;
use resto_api::routes::AppState;
use resto_core::repositories::{MockClientRepository, MockOrderRepository, MockUserRepository};
use resto_core::services::{ClientService, MockPasswordHasher, OrderService, UserService};

pub type TestState =
    AppState<MockOrderRepository, MockClientRepository, MockUserRepository, MockPasswordHasher>;

/// In-memory application state. The order repository is returned so a test
/// can make the store unavailable.
pub fn test_state(error_config: ErrorConfig) -> (web::Data<TestState>, Arc<MockOrderRepository>) {
    let order_repository = Arc::new(MockOrderRepository::new());
    let client_repository = Arc::new(MockClientRepository::new());
    let user_repository = Arc::new(MockUserRepository::new());
    let password_hasher = Arc::new(MockPasswordHasher::new());

    let state = web::Data::new(AppState::new(
        Arc::new(OrderService::new(order_repository.clone())),
        Arc::new(ClientService::new(client_repository)),
        Arc::new(UserService::new(user_repository, password_hasher)),
        error_config,
    ));

    (state, order_repository)
}
