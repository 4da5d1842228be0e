//! Error types for the Savora server.
//!
//! Domain-specific error enums (authentication, admin actions, favorites,
//! the places provider, configuration) are aggregated into a single [`Error`]
//! type. All errors implement `IntoResponse` so handlers can bubble them up
//! with `?`, and `thiserror` provides the `Display`/`Error` implementations.

pub mod admin;
pub mod auth;
pub mod config;
pub mod favorite;
pub mod places;
pub mod retry;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{
        admin::AdminError, auth::AuthError, config::ConfigError, favorite::FavoriteError,
        places::PlacesError,
    },
    model::api::ErrorDto,
};

/// Main error type for the Savora server.
///
/// Aggregates the domain error enums and external library errors into one
/// type so services and handlers can use `?` throughout. The `IntoResponse`
/// implementation delegates to the domain-specific responses; anything
/// without a custom mapping becomes a generic 500.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (credentials, lockout, tokens, registration).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Admin action error (permission guard, role validation).
    #[error(transparent)]
    AdminError(#[from] AdminError),
    /// Favorite reconciliation error (duplicates, missing places).
    #[error(transparent)]
    FavoriteError(#[from] FavoriteError),
    /// Places provider error (requests, provider statuses, incomplete data).
    #[error(transparent)]
    PlacesError(#[from] PlacesError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Socket error while binding or serving.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// Token encoding/decoding error.
    #[error(transparent)]
    JwtError(#[from] jsonwebtoken::errors::Error),
    /// Password hashing error.
    #[error(transparent)]
    HashError(#[from] bcrypt::BcryptError),
    /// Blocking task join error (hashing runs on the blocking pool).
    #[error(transparent)]
    JoinError(#[from] tokio::task::JoinError),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::AdminError(err) => err.into_response(),
            Self::FavoriteError(err) => err.into_response(),
            Self::PlacesError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper that turns any displayable error into a 500 response.
///
/// The full error is logged server-side; the client only sees a generic
/// message so internal detail never leaks through the API.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
