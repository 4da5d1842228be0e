//! Request and response models for the Savora API.
//!
//! These DTOs are the JSON surface of the HTTP endpoints. They are kept
//! separate from the database entities so storage columns never leak into
//! responses (password hashes, lockout counters, recovery PINs).

pub mod account;
pub mod api;
pub mod app;
pub mod auth;
pub mod favorite;
pub mod place;
