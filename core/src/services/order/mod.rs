//! Order use cases: submission with a derived total, listing, edits and removal.

mod service;

#[cfg(test)]
mod tests;

pub use service::OrderService;
