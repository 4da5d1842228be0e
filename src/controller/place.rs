use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    controller::util::current_user::CurrentUser,
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        place::{PlaceDetailsDto, PlaceDto, SearchResultDto},
    },
    service::place::PlaceService,
};

pub static PLACE_TAG: &str = "place";

#[derive(Deserialize)]
pub struct SearchParams {
    pub query: String,
}

/// Search for food places
///
/// Merges provider results, filtered to food categories, with matching
/// places from the local catalog. No session is required; when the request
/// carries one the search term is recorded in the account's history.
#[utoipa::path(
    get,
    path = "/api/places/search",
    tag = PLACE_TAG,
    params(
        ("query" = String, Query, description = "Free text search term")
    ),
    responses(
        (status = 200, description = "Matching food places", body = Vec<SearchResultDto>),
        (status = 401, description = "Invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_places(
    State(state): State<AppState>,
    current: Option<CurrentUser>,
    params: Query<SearchParams>,
) -> Result<impl IntoResponse, Error> {
    let place_service = PlaceService::new(&state.db, &state.places);

    let account_id = current.map(|CurrentUser(account)| account.id);
    let results = place_service.search(account_id, &params.0.query).await?;

    Ok((StatusCode::OK, Json(results)).into_response())
}

/// Get the details of a single place
#[utoipa::path(
    get,
    path = "/api/places/{external_id}",
    tag = PLACE_TAG,
    params(
        ("external_id" = String, Path, description = "Provider id of the place")
    ),
    responses(
        (status = 200, description = "Place details", body = PlaceDetailsDto),
        (status = 404, description = "No place with the given id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_place_details(
    State(state): State<AppState>,
    Path(external_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let place_service = PlaceService::new(&state.db, &state.places);

    let details = place_service.details(&external_id).await?;

    Ok((StatusCode::OK, Json(details)).into_response())
}

/// Get every place in the catalog, cached and locally authored
#[utoipa::path(
    get,
    path = "/api/places/catalog",
    tag = PLACE_TAG,
    responses(
        (status = 200, description = "All known places", body = Vec<PlaceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_catalog_places(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let place_service = PlaceService::new(&state.db, &state.places);

    let places = place_service.catalog_places().await?;

    Ok((StatusCode::OK, Json(places)).into_response())
}

/// Get all places added to the local catalog by administrators
#[utoipa::path(
    get,
    path = "/api/places/local",
    tag = PLACE_TAG,
    responses(
        (status = 200, description = "Locally curated places", body = Vec<PlaceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_local_places(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let place_service = PlaceService::new(&state.db, &state.places);

    let places = place_service.local_places().await?;

    Ok((StatusCode::OK, Json(places)).into_response())
}
