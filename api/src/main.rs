use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::info;

use resto_api::app::create_app;
use resto_api::config::{self, ErrorConfig};
use resto_api::routes::AppState;
use resto_core::services::{ClientService, OrderService, UserService};
use resto_infra::{
    BcryptPasswordHasher, MongoClientRepository, MongoDatabase, MongoOrderRepository,
    MongoUserRepository,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let app_config = config::load();

    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(app_config.environment.default_log_filter()),
    );

    info!("Starting restaurant orders API ({:?})", app_config.environment);

    let database = MongoDatabase::connect(app_config.database.clone())
        .await
        .context("failed to connect to MongoDB")?;
    database
        .ensure_indexes()
        .await
        .context("failed to create collection indexes")?;

    let order_repository = Arc::new(MongoOrderRepository::new(database.database()));
    let client_repository = Arc::new(MongoClientRepository::new(database.database()));
    let user_repository = Arc::new(MongoUserRepository::new(database.database()));
    let password_hasher = Arc::new(BcryptPasswordHasher::from_config(&app_config.security));

    let app_state = web::Data::new(AppState::new(
        Arc::new(OrderService::new(order_repository)),
        Arc::new(ClientService::new(client_repository)),
        Arc::new(UserService::new(user_repository, password_hasher)),
        ErrorConfig::for_environment(app_config.environment),
    ));

    let bind_address = app_config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if app_config.server.workers > 0 {
        server = server.workers(app_config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    database.close().await;
    info!("Server stopped");
    Ok(())
}
