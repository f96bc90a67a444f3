//! Tests for order service
