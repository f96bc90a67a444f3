//! MongoDB repositories, one per collection

mod client_repository_impl;
pub mod documents;
mod order_repository_impl;
mod user_repository_impl;

pub use client_repository_impl::MongoClientRepository;
pub use documents::{AddressDocument, ClientDocument, ItemDocument, OrderDocument, UserDocument};
pub use order_repository_impl::MongoOrderRepository;
pub use user_repository_impl::MongoUserRepository;

use mongodb::error::{Error, ErrorKind, WriteFailure};
use resto_core::errors::DomainError;

/// Collection holding orders
pub const ORDERS: &str = "pedidos";
/// Collection holding clients
pub const CLIENTS: &str = "clientes";
/// Collection holding staff accounts
pub const USERS: &str = "usuarios";

const DUPLICATE_KEY: i32 = 11000;

/// True when the server rejected a write because of a unique index
pub(crate) fn is_duplicate_key(error: &Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(e)) => e.code == DUPLICATE_KEY,
        ErrorKind::Command(e) => e.code == DUPLICATE_KEY,
        _ => false,
    }
}

/// Map a driver error, turning unique-index violations into a conflict
pub(crate) fn write_error(error: Error, context: &str, conflict_message: &str) -> DomainError {
    if is_duplicate_key(&error) {
        return DomainError::conflict(conflict_message);
    }
    store_error(error, context)
}

pub(crate) fn store_error(error: Error, context: &str) -> DomainError {
    tracing::error!(error = %error, "{}", context);
    DomainError::database(format!("{}: {}", context, error))
}
