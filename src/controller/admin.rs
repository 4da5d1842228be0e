use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::util::current_user::AdminUser,
    error::Error,
    model::{
        account::{
            AccountDto, BanUpdateDto, ReviewPermissionUpdateDto, RoleUpdateDto, StatsDto,
        },
        api::{ErrorDto, MessageDto},
        app::AppState,
        place::{NewPlaceDto, PlaceDto},
    },
    service::admin::AdminService,
};

pub static ADMIN_TAG: &str = "admin";

/// List all accounts
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All accounts, oldest first", body = Vec<AccountDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_accounts(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<impl IntoResponse, Error> {
    let admin_service = AdminService::new(&state.db);

    let accounts = admin_service.list_accounts().await?;

    Ok((StatusCode::OK, Json(accounts)).into_response())
}

/// Change the role of an account
///
/// The built-in super admin cannot be modified, and only the super admin may
/// modify other administrators.
#[utoipa::path(
    put,
    path = "/api/admin/users/{id}/role",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Id of the target account")
    ),
    request_body = RoleUpdateDto,
    responses(
        (status = 200, description = "Updated account", body = AccountDto),
        (status = 400, description = "Unknown role", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Target account is protected", body = ErrorDto),
        (status = 404, description = "No account with the given id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_role(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<i32>,
    Json(form): Json<RoleUpdateDto>,
) -> Result<impl IntoResponse, Error> {
    let admin_service = AdminService::new(&state.db);

    let account = admin_service.set_role(&admin, id, &form.role).await?;

    Ok((StatusCode::OK, Json(account)).into_response())
}

/// Ban or unban an account
#[utoipa::path(
    put,
    path = "/api/admin/users/{id}/ban",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Id of the target account")
    ),
    request_body = BanUpdateDto,
    responses(
        (status = 200, description = "Updated account", body = AccountDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Target account is protected", body = ErrorDto),
        (status = 404, description = "No account with the given id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_ban(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<i32>,
    Json(form): Json<BanUpdateDto>,
) -> Result<impl IntoResponse, Error> {
    let admin_service = AdminService::new(&state.db);

    let account = admin_service.set_banned(&admin, id, form.banned).await?;

    Ok((StatusCode::OK, Json(account)).into_response())
}

/// Grant or revoke an account's permission to write reviews
#[utoipa::path(
    put,
    path = "/api/admin/users/{id}/review-permission",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Id of the target account")
    ),
    request_body = ReviewPermissionUpdateDto,
    responses(
        (status = 200, description = "Updated account", body = AccountDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Target account is protected", body = ErrorDto),
        (status = 404, description = "No account with the given id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_review_permission(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<i32>,
    Json(form): Json<ReviewPermissionUpdateDto>,
) -> Result<impl IntoResponse, Error> {
    let admin_service = AdminService::new(&state.db);

    let account = admin_service
        .set_can_review(&admin, id, form.can_review)
        .await?;

    Ok((StatusCode::OK, Json(account)).into_response())
}

/// Delete an account
///
/// Favorites and search history of the account are deleted with it.
/// Administrators cannot delete their own account.
#[utoipa::path(
    delete,
    path = "/api/admin/users/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Id of the target account")
    ),
    responses(
        (status = 200, description = "Account deleted", body = MessageDto),
        (status = 400, description = "Cannot delete own account", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Target account is protected", body = ErrorDto),
        (status = 404, description = "No account with the given id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_account(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let admin_service = AdminService::new(&state.db);

    admin_service.delete_account(&admin, id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Account deleted".to_string(),
        }),
    )
        .into_response())
}

/// Get usage statistics
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Counters over accounts, places and favorites", body = StatsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<impl IntoResponse, Error> {
    let admin_service = AdminService::new(&state.db);

    let stats = admin_service.stats().await?;

    Ok((StatusCode::OK, Json(stats)).into_response())
}

/// Add a curated place to the local catalog
#[utoipa::path(
    post,
    path = "/api/admin/places",
    tag = ADMIN_TAG,
    request_body = NewPlaceDto,
    responses(
        (status = 201, description = "Place added to the catalog", body = PlaceDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 409, description = "A place with the given id already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_place(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Json(form): Json<NewPlaceDto>,
) -> Result<impl IntoResponse, Error> {
    let admin_service = AdminService::new(&state.db);

    let place = admin_service.create_local_place(&admin, form).await?;

    Ok((StatusCode::CREATED, Json(place)).into_response())
}
