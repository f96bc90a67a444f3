//! Repository interfaces and in-memory implementations.
//!
//! Every entity repository shares the [`CrudRepository`] capability set and
//! adds its own lookups through an extension trait.

pub mod client;
pub mod crud;
pub mod order;
pub mod user;

pub use client::{ClientRepository, MockClientRepository};
pub use crud::CrudRepository;
pub use order::{MockOrderRepository, OrderRepository};
pub use user::{MockUserRepository, UserRepository};
