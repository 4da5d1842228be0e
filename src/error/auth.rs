use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{
    api::ErrorDto,
    auth::{LockedDto, LoginFailureDto},
};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials for {email}")]
    InvalidCredentials {
        email: String,
        attempts_left: Option<i32>,
    },
    #[error("Account {0} is banned")]
    Banned(String),
    #[error("Account {0} is temporarily locked")]
    Locked(String),
    #[error("Email {0} is already registered")]
    EmailTaken(String),
    #[error("Name {0} is already taken")]
    NameTaken(String),
    #[error("Recovery PIN must be between {min} and {max} characters")]
    PinLength { min: usize, max: usize },
    #[error("Recovery PIN rejected for {0}")]
    InvalidPin(String),
    #[error("No account found for {0}")]
    AccountNotFound(String),
    #[error("Missing or malformed bearer token")]
    MissingToken,
    #[error("Bearer token rejected: {0}")]
    InvalidToken(String),
    #[error("Current password does not match")]
    CurrentPasswordMismatch,
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.to_string(),
        }),
    )
        .into_response()
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials {
                ref email,
                attempts_left,
            } => {
                tracing::debug!(email = %email, "{}", self);

                match attempts_left {
                    Some(attempts_left) => (
                        StatusCode::UNAUTHORIZED,
                        Json(LoginFailureDto {
                            error: "Invalid credentials".to_string(),
                            attempts_left,
                        }),
                    )
                        .into_response(),
                    None => error_body(StatusCode::UNAUTHORIZED, "Invalid credentials"),
                }
            }
            Self::Banned(ref email) => {
                tracing::debug!(email = %email, "{}", self);

                error_body(StatusCode::FORBIDDEN, "Account is banned")
            }
            Self::Locked(ref email) => {
                tracing::debug!(email = %email, "{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(LockedDto {
                        error: "Account is temporarily locked, unlock it with your recovery PIN"
                            .to_string(),
                        locked: true,
                    }),
                )
                    .into_response()
            }
            Self::EmailTaken(_) => error_body(StatusCode::CONFLICT, "Email is already registered"),
            Self::NameTaken(_) => error_body(StatusCode::CONFLICT, "Name is already taken"),
            Self::PinLength { min, max } => error_body(
                StatusCode::BAD_REQUEST,
                &format!("Recovery PIN must be between {} and {} characters", min, max),
            ),
            Self::InvalidPin(ref email) => {
                tracing::debug!(email = %email, "{}", self);

                error_body(StatusCode::BAD_REQUEST, "Invalid recovery PIN")
            }
            Self::AccountNotFound(_) => error_body(StatusCode::NOT_FOUND, "Account not found"),
            Self::MissingToken | Self::InvalidToken(_) => {
                tracing::debug!("{}", self);

                error_body(StatusCode::UNAUTHORIZED, "Not authenticated")
            }
            Self::CurrentPasswordMismatch => {
                error_body(StatusCode::BAD_REQUEST, "Current password is incorrect")
            }
        }
    }
}
