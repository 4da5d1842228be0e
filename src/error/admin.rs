use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Account {0} does not have administrator access")]
    NotAdmin(i32),
    #[error("Administrator {actor} may not act on administrator {target}")]
    ProtectedAccount { actor: i32, target: i32 },
    #[error("Administrators may not delete their own account")]
    SelfDeletion,
    #[error("Unknown role {0:?}")]
    InvalidRole(String),
    #[error("No account with ID {0}")]
    TargetNotFound(i32),
    #[error("A place with external ID {0:?} already exists")]
    PlaceExists(String),
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotAdmin(account_id) => {
                tracing::debug!(account_id = %account_id, "{}", self);

                (StatusCode::FORBIDDEN, "Administrator access required")
            }
            Self::ProtectedAccount { actor, target } => {
                tracing::warn!(actor = %actor, target = %target, "{}", self);

                (
                    StatusCode::FORBIDDEN,
                    "Cannot modify another administrator's account",
                )
            }
            Self::SelfDeletion => (
                StatusCode::BAD_REQUEST,
                "You cannot delete your own account",
            ),
            Self::InvalidRole(_) => (
                StatusCode::BAD_REQUEST,
                "Role must be one of ADMIN, USER, or GUEST",
            ),
            Self::TargetNotFound(_) => (StatusCode::NOT_FOUND, "User not found"),
            Self::PlaceExists(_) => (
                StatusCode::CONFLICT,
                "A place with this external ID already exists",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
