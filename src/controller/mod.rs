//! HTTP controller endpoints for the Savora web API.
//!
//! This module contains Axum handlers for authentication, account management,
//! place discovery, favorites, and administration. Controllers handle HTTP
//! requests, validate inputs, interact with services, and return appropriate
//! HTTP responses. Authentication is bearer-token based via the extractors in
//! [`util::current_user`], and every endpoint is documented with utoipa.

pub mod admin;
pub mod auth;
pub mod favorite;
pub mod place;
pub mod user;
pub mod util;
