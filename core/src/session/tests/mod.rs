//! Tests for the request-scoped builder session
