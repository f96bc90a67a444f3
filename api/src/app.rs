//! Application factory
//!
//! Builds the Actix-web application around a shared [`AppState`]. The same
//! factory serves the binary and the integration tests, which plug in
//! in-memory repositories.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware::Logger, web, App, HttpResponse};

use resto_core::repositories::{ClientRepository, OrderRepository, UserRepository};
use resto_core::services::PasswordHasher;
use resto_shared::ErrorResponse;

use crate::handlers::json_error_handler;
use crate::middleware::cors::create_cors;
use crate::routes::clients::{
    create_client, delete_client, get_client, get_client_by_document, list_clients,
    search_clients, update_client,
};
use crate::routes::health::health_check;
use crate::routes::orders::{create_order, delete_order, get_order, list_orders, update_order};
use crate::routes::users::{
    create_user, delete_user, get_user, list_users, login, update_user,
};
use crate::routes::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<O, C, U, H>(
    app_state: web::Data<AppState<O, C, U, H>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    O: OrderRepository + 'static,
    C: ClientRepository + 'static,
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Logger::default())
        .wrap(create_cors())
        .route("/", web::get().to(health_check))
        .service(
            web::scope("/pedidos")
                .route("", web::post().to(create_order::<O, C, U, H>))
                .route("", web::get().to(list_orders::<O, C, U, H>))
                .route("/{id}", web::get().to(get_order::<O, C, U, H>))
                .route("/{id}", web::put().to(update_order::<O, C, U, H>))
                .route("/{id}", web::delete().to(delete_order::<O, C, U, H>)),
        )
        .service(
            web::scope("/usuarios")
                // Literal segments before `/{id}`
                .route("/login", web::post().to(login::<O, C, U, H>))
                .route("", web::post().to(create_user::<O, C, U, H>))
                .route("", web::get().to(list_users::<O, C, U, H>))
                .route("/{id}", web::get().to(get_user::<O, C, U, H>))
                .route("/{id}", web::put().to(update_user::<O, C, U, H>))
                .route("/{id}", web::delete().to(delete_user::<O, C, U, H>)),
        )
        .service(
            web::scope("/clientes")
                .route("/buscar", web::get().to(search_clients::<O, C, U, H>))
                .route(
                    "/documento/{documento}",
                    web::get().to(get_client_by_document::<O, C, U, H>),
                )
                .route("", web::post().to(create_client::<O, C, U, H>))
                .route("", web::get().to(list_clients::<O, C, U, H>))
                .route("/{id}", web::get().to(get_client::<O, C, U, H>))
                .route("/{id}", web::put().to(update_client::<O, C, U, H>))
                .route("/{id}", web::delete().to(delete_client::<O, C, U, H>)),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("Ruta no encontrada"))
}
