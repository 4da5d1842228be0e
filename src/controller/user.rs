use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    controller::util::current_user::CurrentUser,
    error::Error,
    model::{
        account::{AccountDto, UpdateProfileDto, UpdatedProfileDto},
        api::ErrorDto,
        app::AppState,
    },
    service::{account::AccountService, place::PlaceService},
};

pub static USER_TAG: &str = "user";

/// Get the profile of the logged in account
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Profile of the current account", body = AccountDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(CurrentUser(account): CurrentUser) -> Result<impl IntoResponse, Error> {
    Ok((StatusCode::OK, Json(AccountDto::from(account))).into_response())
}

/// Update the profile of the logged in account
///
/// All fields are optional; a password change additionally requires the
/// current password. Changing the email invalidates the bearer token, which
/// is flagged in the response so the client can re-authenticate.
#[utoipa::path(
    put,
    path = "/api/users/me",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = UpdatedProfileDto),
        (status = 400, description = "Current password missing or incorrect", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 409, description = "Name or email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    CurrentUser(account): CurrentUser,
    Json(form): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, Error> {
    let account_service = AccountService::new(&state.db);

    let updated = account_service.update_profile(&account, form).await?;

    Ok((StatusCode::OK, Json(updated)).into_response())
}

/// Get the most recent search terms of the logged in account
#[utoipa::path(
    get,
    path = "/api/users/me/searches",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Recent search terms, newest first", body = Vec<String>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recent_searches(
    State(state): State<AppState>,
    CurrentUser(account): CurrentUser,
) -> Result<impl IntoResponse, Error> {
    let place_service = PlaceService::new(&state.db, &state.places);

    let terms = place_service.recent_searches(account.id).await?;

    Ok((StatusCode::OK, Json(terms)).into_response())
}
