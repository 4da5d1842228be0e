//! Tests for the bearer-token request extractors.
