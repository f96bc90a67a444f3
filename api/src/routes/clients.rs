//! Handlers for `/clientes`

use actix_web::{web, HttpResponse};

use resto_core::domain::entities::{ClientUpdate, NewClient};
use resto_core::domain::parse_id;
use resto_core::errors::DomainError;
use resto_core::repositories::{ClientRepository, OrderRepository, UserRepository};
use resto_core::services::PasswordHasher;
use resto_shared::MessageResponse;

use super::AppState;
use crate::dto::SearchQuery;
use crate::handlers::{handle_domain_error, not_found};

const CLIENT_NOT_FOUND: &str = "Cliente no encontrado";

/// Handler for POST /clientes
pub async fn create_client<O, C, U, H>(
    state: web::Data<AppState<O, C, U, H>>,
    body: web::Json<NewClient>,
) -> HttpResponse
where
    O: OrderRepository + 'static,
    C: ClientRepository + 'static,
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    match state.client_service.create(body.into_inner()).await {
        Ok(client) => HttpResponse::Created().json(client),
        Err(e) => handle_domain_error(e, &state.error_config),
    }
}

/// Handler for GET /clientes
pub async fn list_clients<O, C, U, H>(state: web::Data<AppState<O, C, U, H>>) -> HttpResponse
where
    O: OrderRepository + 'static,
    C: ClientRepository + 'static,
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    match state.client_service.list().await {
        Ok(clients) => HttpResponse::Ok().json(clients),
        Err(e) => handle_domain_error(e, &state.error_config),
    }
}

/// Handler for GET /clientes/buscar?nombre=
pub async fn search_clients<O, C, U, H>(
    state: web::Data<AppState<O, C, U, H>>,
    query: web::Query<SearchQuery>,
) -> HttpResponse
where
    O: OrderRepository + 'static,
    C: ClientRepository + 'static,
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    let Some(term) = query.into_inner().nombre else {
        return handle_domain_error(
            DomainError::validation("Parámetro nombre es requerido"),
            &state.error_config,
        );
    };

    match state.client_service.search_by_name(&term).await {
        Ok(clients) => HttpResponse::Ok().json(clients),
        Err(e) => handle_domain_error(e, &state.error_config),
    }
}

/// Handler for GET /clientes/documento/{documento}
pub async fn get_client_by_document<O, C, U, H>(
    state: web::Data<AppState<O, C, U, H>>,
    path: web::Path<String>,
) -> HttpResponse
where
    O: OrderRepository + 'static,
    C: ClientRepository + 'static,
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    match state.client_service.get_by_document(&path).await {
        Ok(Some(client)) => HttpResponse::Ok().json(client),
        Ok(None) => not_found(CLIENT_NOT_FOUND),
        Err(e) => handle_domain_error(e, &state.error_config),
    }
}

/// Handler for GET /clientes/{id}
pub async fn get_client<O, C, U, H>(
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
        Ok(id) => state.client_service.get_by_id(id).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(Some(client)) => HttpResponse::Ok().json(client),
        Ok(None) => not_found(CLIENT_NOT_FOUND),
        Err(e) => handle_domain_error(e, &state.error_config),
    }
}

/// Handler for PUT /clientes/{id}
pub async fn update_client<O, C, U, H>(
    state: web::Data<AppState<O, C, U, H>>,
    path: web::Path<String>,
    body: web::Json<ClientUpdate>,
) -> HttpResponse
where
    O: OrderRepository + 'static,
    C: ClientRepository + 'static,
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    let result = match parse_id(&path) {
        Ok(id) => state.client_service.update(id, body.into_inner()).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(Some(client)) => HttpResponse::Ok().json(client),
        Ok(None) => not_found(CLIENT_NOT_FOUND),
        Err(e) => handle_domain_error(e, &state.error_config),
    }
}

/// Handler for DELETE /clientes/{id}
pub async fn delete_client<O, C, U, H>(
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
        Ok(id) => state.client_service.delete(id).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(Some(_)) => {
            HttpResponse::Ok().json(MessageResponse::new("Cliente eliminado correctamente"))
        }
        Ok(None) => not_found(CLIENT_NOT_FOUND),
        Err(e) => handle_domain_error(e, &state.error_config),
    }
}
