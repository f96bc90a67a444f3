//! Domain layer: entities and their validation rules.

pub mod entities;

pub use entities::*;

use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};

/// Parse a resource id taken from a request path.
///
/// A malformed id is a client error, never a store error.
pub fn parse_id(raw: &str) -> DomainResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| DomainError::InvalidId {
        id: raw.to_string(),
    })
}
