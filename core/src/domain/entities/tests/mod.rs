//! Tests for domain entities

mod client_tests;
mod user_tests;
