use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::util::current_user::CurrentUser,
    error::Error,
    model::{
        api::{ErrorDto, MessageDto},
        app::AppState,
        favorite::{AddFavoriteDto, FavoriteDto, FavoriteStatusDto},
    },
    service::favorite::FavoriteService,
};

pub static FAVORITE_TAG: &str = "favorite";

/// Save a place to the logged in account's favorites
///
/// The place is resolved through the catalog first; unknown places are
/// fetched from the provider (with retries) and cached before the favorite
/// is saved.
#[utoipa::path(
    post,
    path = "/api/favorites",
    tag = FAVORITE_TAG,
    request_body = AddFavoriteDto,
    responses(
        (status = 201, description = "Favorite saved", body = FavoriteDto),
        (status = 400, description = "Missing place id", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 409, description = "Place is already a favorite", body = ErrorDto),
        (status = 502, description = "Place provider unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    CurrentUser(account): CurrentUser,
    Json(form): Json<AddFavoriteDto>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db, &state.places);

    let favorite = favorite_service
        .add_favorite(account.id, &form.external_id)
        .await?;

    Ok((StatusCode::CREATED, Json(favorite)).into_response())
}

/// Remove a place from the logged in account's favorites
#[utoipa::path(
    delete,
    path = "/api/favorites/{external_id}",
    tag = FAVORITE_TAG,
    params(
        ("external_id" = String, Path, description = "Provider id of the place")
    ),
    responses(
        (status = 200, description = "Favorite removed", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Place is not in the catalog", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    CurrentUser(account): CurrentUser,
    Path(external_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db, &state.places);

    favorite_service
        .remove_favorite(account.id, &external_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Favorite removed".to_string(),
        }),
    )
        .into_response())
}

/// Get all favorites of the logged in account
#[utoipa::path(
    get,
    path = "/api/favorites",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "Favorites, newest first", body = Vec<FavoriteDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorites(
    State(state): State<AppState>,
    CurrentUser(account): CurrentUser,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db, &state.places);

    let favorites = favorite_service.list_favorites(account.id).await?;

    Ok((StatusCode::OK, Json(favorites)).into_response())
}

/// Check whether a place is in the logged in account's favorites
#[utoipa::path(
    get,
    path = "/api/favorites/{external_id}/status",
    tag = FAVORITE_TAG,
    params(
        ("external_id" = String, Path, description = "Provider id of the place")
    ),
    responses(
        (status = 200, description = "Favorite status of the place", body = FavoriteStatusDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorite_status(
    State(state): State<AppState>,
    CurrentUser(account): CurrentUser,
    Path(external_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db, &state.places);

    let favorite = favorite_service.is_favorite(account.id, &external_id).await?;

    Ok((StatusCode::OK, Json(FavoriteStatusDto { favorite })).into_response())
}
