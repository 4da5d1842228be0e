use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors from the external places provider.
///
/// Every variant is treated as transient inside the favorite reconciliation
/// retry loop; outside of it, provider failures surface as 502 except for a
/// definitive "no such place" answer.
#[derive(Error, Debug)]
pub enum PlacesError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error("Provider rate limit exceeded")]
    RateLimited,
    #[error("Provider returned status {status:?}: {message}")]
    Status { status: String, message: String },
    #[error("Provider has no place for ID {0:?}")]
    NotFound(String),
    #[error("Provider details for {0:?} are missing a name")]
    MissingName(String),
}

impl IntoResponse for PlacesError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "Place not found"),
            _ => {
                tracing::warn!("places provider failure: {}", self);

                (
                    StatusCode::BAD_GATEWAY,
                    "Could not fetch place details from the provider",
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
