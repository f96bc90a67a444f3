//! Client use cases: document-unique registration, lookups and name search.

mod service;

#[cfg(test)]
mod tests;

pub use service::ClientService;
