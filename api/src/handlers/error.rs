//! Mapping of domain errors to HTTP responses
//!
//! This is the only place where errors become status codes:
//! - validation, conflict and malformed ids: 400
//! - bad credentials: 401
//! - store and internal failures: 500

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{HttpRequest, HttpResponse};

use resto_core::errors::DomainError;
use resto_shared::ErrorResponse;

use crate::config::ErrorConfig;

/// Message sent for 5xx responses when internal details are hidden
pub const GENERIC_SERVER_ERROR: &str = "Error interno del servidor";

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError, config: &ErrorConfig) -> HttpResponse {
    match error {
        DomainError::InvalidCredentials => {
            HttpResponse::Unauthorized().json(ErrorResponse::new(error.to_string()))
        }
        ref e if e.is_client_error() => {
            log::warn!("Rejected request: {}", e);
            HttpResponse::BadRequest().json(ErrorResponse::new(e.to_string()))
        }
        e => {
            log::error!("Request failed: {}", e);
            let message = if config.expose_internal {
                e.to_string()
            } else {
                GENERIC_SERVER_ERROR.to_string()
            };
            HttpResponse::InternalServerError().json(ErrorResponse::new(message))
        }
    }
}

/// 404 with an entity-specific message
pub fn not_found(message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(message))
}

/// Malformed or mistyped JSON bodies are client errors
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = format!("JSON inválido: {}", error);
    log::warn!("{}", message);
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(message));
    InternalError::from_response(error, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_status_mapping() {
        let config = ErrorConfig::default();

        let cases = vec![
            (DomainError::validation("El cliente es requerido"), StatusCode::BAD_REQUEST),
            (DomainError::conflict("El email ya está registrado"), StatusCode::BAD_REQUEST),
            (DomainError::InvalidId { id: "x".into() }, StatusCode::BAD_REQUEST),
            (DomainError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (DomainError::database("timeout"), StatusCode::INTERNAL_SERVER_ERROR),
            (
                DomainError::Internal { message: "boom".into() },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(handle_domain_error(error, &config).status(), expected);
        }
    }
}
