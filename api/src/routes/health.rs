use actix_web::HttpResponse;

use resto_shared::HealthResponse;

/// `GET /`
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::new("API de Pedidos de Restaurante funcionando"))
}
