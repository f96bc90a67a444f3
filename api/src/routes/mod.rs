//! HTTP routes, one module per resource

pub mod clients;
pub mod health;
pub mod orders;
pub mod users;

use std::sync::Arc;

use resto_core::repositories::{ClientRepository, OrderRepository, UserRepository};
use resto_core::services::{ClientService, OrderService, PasswordHasher, UserService};

use crate::config::ErrorConfig;

/// Application state that holds shared services
pub struct AppState<O, C, U, H>
where
    O: OrderRepository,
    C: ClientRepository,
    U: UserRepository,
    H: PasswordHasher,
{
    pub order_service: Arc<OrderService<O>>,
    pub client_service: Arc<ClientService<C>>,
    pub user_service: Arc<UserService<U, H>>,
    pub error_config: ErrorConfig,
}

impl<O, C, U, H> AppState<O, C, U, H>
where
    O: OrderRepository,
    C: ClientRepository,
    U: UserRepository,
    H: PasswordHasher,
{
    pub fn new(
        order_service: Arc<OrderService<O>>,
        client_service: Arc<ClientService<C>>,
        user_service: Arc<UserService<U, H>>,
        error_config: ErrorConfig,
    ) -> Self {
        Self {
            order_service,
            client_service,
            user_service,
            error_config,
        }
    }
}
