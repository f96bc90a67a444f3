//! Domain-specific error types and error handling.

mod types;


pub use types::ValidationError;

use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Core domain errors
///
/// "Not found" is not an error here: lookups return `Ok(None)` and the
/// HTTP layer turns that into a 404.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Malformed or constraint-violating input
    #[error("{message}")]
    Validation { message: String },

    /// A unique key (document number, email) is already taken
    #[error("{message}")]
    Conflict { message: String },

    /// The path identifier is not a valid resource id
    #[error("ID inválido: {id}")]
    InvalidId { id: String },

    /// Unknown email, wrong password or inactive account
    #[error("Credenciales inválidas")]
    InvalidCredentials,

    /// Store unreachable or rejected the operation
    #[error("Error de base de datos: {message}")]
    Database { message: String },

    #[error("Error interno: {message}")]
    Internal { message: String },

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        DomainError::Conflict {
            message: message.into(),
        }
    }

    pub fn database(message: impl ToString) -> Self {
        DomainError::Database {
            message: message.to_string(),
        }
    }

    /// True for errors caused by the request itself (mapped to 4xx)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DomainError::Validation { .. }
                | DomainError::Conflict { .. }
                | DomainError::InvalidId { .. }
                | DomainError::InvalidCredentials
                | DomainError::ValidationErr(_)
        )
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages = Vec::new();
        collect_messages("", &errors, &mut messages);

        if messages.is_empty() {
            messages.push("Datos inválidos".to_string());
        }

        DomainError::Validation {
            message: messages.join("; "),
        }
    }
}

/// Flatten validator output into readable messages, ordered by field name
/// so the response is stable across runs.
fn collect_messages(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    let mut entries: Vec<_> = errors.errors().iter().collect();
    entries.sort_by_key(|(field, _)| field.to_string());

    for (field, kind) in entries {
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{}{}: {}", prefix, field, error.code));
                    out.push(message);
                }
            }
            ValidationErrorsKind::Struct(inner) => {
                collect_messages(&format!("{}{}.", prefix, field), inner, out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_messages(&format!("{}{}[{}].", prefix, field, index), inner, out);
                }
            }
        }
    }
}
