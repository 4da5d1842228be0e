//! Shared utilities for token issuing and credential hashing.

pub mod jwt;
pub mod password;
