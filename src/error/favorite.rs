use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum FavoriteError {
    #[error("Place {external_id:?} is already a favorite of account {account_id}")]
    AlreadyExists {
        account_id: i32,
        external_id: String,
    },
    #[error("Place {0:?} is not in the local catalog")]
    PlaceNotFound(String),
    #[error("A place ID is required")]
    MissingExternalId,
    #[error("Could not fetch details for place {external_id:?} after {attempts} attempts")]
    ExternalUnavailable { external_id: String, attempts: u32 },
}

impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::AlreadyExists { .. } => {
                (StatusCode::CONFLICT, "Place is already in your favorites")
            }
            Self::PlaceNotFound(_) => (StatusCode::NOT_FOUND, "Place not found"),
            Self::MissingExternalId => (StatusCode::BAD_REQUEST, "A place ID is required"),
            Self::ExternalUnavailable {
                external_id,
                attempts,
            } => {
                tracing::warn!(
                    external_id = %external_id,
                    attempts = %attempts,
                    "giving up on place details fetch"
                );

                (
                    StatusCode::BAD_GATEWAY,
                    "Could not fetch place details, please try again later",
                )
            }
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
