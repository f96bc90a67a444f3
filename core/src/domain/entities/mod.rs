//! Domain entities representing core business objects.

pub mod client;
pub mod dates;
pub mod order;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use client::{Client, ClientUpdate, NewClient};
pub use order::{
    compute_total, DeliveryAddress, NewOrder, Order, OrderChanges, OrderItem, OrderUpdate,
};
pub use user::{NewUser, User, UserChanges, UserRole, UserUpdate};
