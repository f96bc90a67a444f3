//! Tests for client service
