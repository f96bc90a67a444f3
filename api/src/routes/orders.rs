//! Handlers for `/pedidos`

use actix_web::{web, HttpResponse};

use resto_core::domain::entities::{NewOrder, OrderUpdate};
use resto_core::domain::parse_id;
use resto_core::repositories::{ClientRepository, OrderRepository, UserRepository};
use resto_core::services::PasswordHasher;
use resto_shared::MessageResponse;

use super::AppState;
use crate::handlers::{handle_domain_error, not_found};

const ORDER_NOT_FOUND: &str = "Pedido no encontrado";

/// Handler for POST /pedidos
///
/// The response carries the stored order with its computed `total`.
pub async fn create_order<O, C, U, H>(
    state: web::Data<AppState<O, C, U, H>>,
    body: web::Json<NewOrder>,
) -> HttpResponse
where
    O: OrderRepository + 'static,
    C: ClientRepository + 'static,
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    match state.order_service.create(body.into_inner()).await {
        Ok(order) => HttpResponse::Created().json(order),
        Err(e) => handle_domain_error(e, &state.error_config),
    }
}

/// Handler for GET /pedidos
pub async fn list_orders<O, C, U, H>(state: web::Data<AppState<O, C, U, H>>) -> HttpResponse
where
    O: OrderRepository + 'static,
    C: ClientRepository + 'static,
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    match state.order_service.list().await {
        Ok(orders) => HttpResponse::Ok().json(orders),
        Err(e) => handle_domain_error(e, &state.error_config),
    }
}

/// Handler for GET /pedidos/{id}
pub async fn get_order<O, C, U, H>(
    state: web::Data<AppState<O, C, U, H>>,
    path: web::Path<String>,
) -> HttpResponse
where
    O: OrderRepository + 'static,
    C: ClientRepository + 'static,
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    let result = match parse_id(&path) {
        Ok(id) => state.order_service.get_by_id(id).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(Some(order)) => HttpResponse::Ok().json(order),
        Ok(None) => not_found(ORDER_NOT_FOUND),
        Err(e) => handle_domain_error(e, &state.error_config),
    }
}

/// Handler for PUT /pedidos/{id}
///
/// Sending `items` recomputes the total; any other change keeps it.
pub async fn update_order<O, C, U, H>(
    state: web::Data<AppState<O, C, U, H>>,
    path: web::Path<String>,
    body: web::Json<OrderUpdate>,
) -> HttpResponse
where
    O: OrderRepository + 'static,
    C: ClientRepository + 'static,
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    let result = match parse_id(&path) {
        Ok(id) => state.order_service.update(id, body.into_inner()).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(Some(order)) => HttpResponse::Ok().json(order),
        Ok(None) => not_found(ORDER_NOT_FOUND),
        Err(e) => handle_domain_error(e, &state.error_config),
    }
}

/// Handler for DELETE /pedidos/{id}
pub async fn delete_order<O, C, U, H>(
    state: web::Data<AppState<O, C, U, H>>,
    path: web::Path<String>,
) -> HttpResponse
where
    O: OrderRepository + 'static,
    C: ClientRepository + 'static,
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    let result = match parse_id(&path) {
        Ok(id) => state.order_service.delete(id).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(Some(_)) => {
            HttpResponse::Ok().json(MessageResponse::new("Pedido eliminado correctamente"))
        }
        Ok(None) => not_found(ORDER_NOT_FOUND),
        Err(e) => handle_domain_error(e, &state.error_config),
    }
}
