//! Request and response bodies that are not domain entities

pub mod client;
pub mod user;

pub use client::SearchQuery;
pub use user::{LoginRequest, LoginResponse, UserSummary};
