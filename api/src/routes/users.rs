//! Handlers for `/usuarios`

use actix_web::{web, HttpResponse};

use resto_core::domain::entities::{NewUser, UserUpdate};
use resto_core::domain::parse_id;
use resto_core::repositories::{ClientRepository, OrderRepository, UserRepository};
use resto_core::services::PasswordHasher;
use resto_shared::MessageResponse;

use super::AppState;
use crate::dto::{LoginRequest, LoginResponse};
use crate::handlers::{handle_domain_error, not_found};

const USER_NOT_FOUND: &str = "Usuario no encontrado";

/// Handler for POST /usuarios
///
/// The password hash is never part of the response.
pub async fn create_user<O, C, U, H>(
    state: web::Data<AppState<O, C, U, H>>,
    body: web::Json<NewUser>,
) -> HttpResponse
where
    O: OrderRepository + 'static,
    C: ClientRepository + 'static,
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    match state.user_service.create(body.into_inner()).await {
        Ok(user) => HttpResponse::Created().json(user),
        Err(e) => handle_domain_error(e, &state.error_config),
    }
}

/// Handler for POST /usuarios/login
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Login exitoso",
///     "usuario": { "id": "...", "email": "admin@restaurante.com", "rol": "admin" }
/// }
/// ```
///
/// ## Errors
/// 401 `{"error": "Credenciales inválidas"}` for unknown email, wrong
/// password and inactive account alike.
pub async fn login<O, C, U, H>(
    state: web::Data<AppState<O, C, U, H>>,
    body: web::Json<LoginRequest>,
) -> HttpResponse
where
    O: OrderRepository + 'static,
    C: ClientRepository + 'static,
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    let request = body.into_inner();
    match state
        .user_service
        .authenticate(&request.email, &request.password)
        .await
    {
        Ok(user) => HttpResponse::Ok().json(LoginResponse::success(&user)),
        Err(e) => handle_domain_error(e, &state.error_config),
    }
}

/// Handler for GET /usuarios
pub async fn list_users<O, C, U, H>(state: web::Data<AppState<O, C, U, H>>) -> HttpResponse
where
    O: OrderRepository + 'static,
    C: ClientRepository + 'static,
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    match state.user_service.list().await {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(e) => handle_domain_error(e, &state.error_config),
    }
}

/// Handler for GET /usuarios/{id}
pub async fn get_user<O, C, U, H>(
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
        Ok(id) => state.user_service.get_by_id(id).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(Some(user)) => HttpResponse::Ok().json(user),
        Ok(None) => not_found(USER_NOT_FOUND),
        Err(e) => handle_domain_error(e, &state.error_config),
    }
}

/// Handler for PUT /usuarios/{id}
///
/// A `password` in the body is hashed before it is stored.
pub async fn update_user<O, C, U, H>(
    state: web::Data<AppState<O, C, U, H>>,
    path: web::Path<String>,
    body: web::Json<UserUpdate>,
) -> HttpResponse
where
    O: OrderRepository + 'static,
    C: ClientRepository + 'static,
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    let result = match parse_id(&path) {
        Ok(id) => state.user_service.update(id, body.into_inner()).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(Some(user)) => HttpResponse::Ok().json(user),
        Ok(None) => not_found(USER_NOT_FOUND),
        Err(e) => handle_domain_error(e, &state.error_config),
    }
}

/// Handler for DELETE /usuarios/{id}
pub async fn delete_user<O, C, U, H>(
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
        Ok(id) => state.user_service.delete(id).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(Some(_)) => {
            HttpResponse::Ok().json(MessageResponse::new("Usuario eliminado correctamente"))
        }
        Ok(None) => not_found(USER_NOT_FOUND),
        Err(e) => handle_domain_error(e, &state.error_config),
    }
}
