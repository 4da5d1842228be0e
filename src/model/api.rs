use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response for operations that succeed without returning data
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    /// A short confirmation message
    pub message: String,
}
