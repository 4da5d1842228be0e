use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    controller::util::current_user::CurrentUser,
    error::Error,
    model::{
        api::{ErrorDto, MessageDto},
        app::AppState,
        auth::{AuthResponseDto, LockedDto, LoginDto, LoginFailureDto, RegisterDto, UnlockDto},
    },
    service::auth::AuthService,
};

pub static AUTH_TAG: &str = "auth";

/// Register a new account and start a session
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created, session started", body = AuthResponseDto),
        (status = 400, description = "Recovery PIN length out of range", body = ErrorDto),
        (status = 409, description = "Email or name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(form): Json<RegisterDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db, &state.tokens);

    let session = auth_service.register(form).await?;

    Ok((StatusCode::CREATED, Json(session)).into_response())
}

/// Log in with email and password
///
/// Failed attempts are counted; after the third consecutive failure the
/// account is temporarily locked and must be unlocked with the recovery PIN.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login succeeded", body = AuthResponseDto),
        (status = 401, description = "Invalid credentials", body = LoginFailureDto),
        (status = 403, description = "Account banned or temporarily locked", body = LockedDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(form): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db, &state.tokens);

    let session = auth_service.login(form).await?;

    Ok((StatusCode::OK, Json(session)).into_response())
}

/// Unlock a locked account with the recovery PIN
#[utoipa::path(
    post,
    path = "/api/auth/unlock",
    tag = AUTH_TAG,
    request_body = UnlockDto,
    responses(
        (status = 200, description = "Account unlocked, session started", body = AuthResponseDto),
        (status = 400, description = "Recovery PIN rejected", body = ErrorDto),
        (status = 404, description = "No account for the given email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unlock(
    State(state): State<AppState>,
    Json(form): Json<UnlockDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db, &state.tokens);

    let session = auth_service.unlock_with_pin(form).await?;

    Ok((StatusCode::OK, Json(session)).into_response())
}

/// Start an anonymous guest session
///
/// Creates a throwaway guest account with random credentials. The account is
/// deleted again when the guest logs out.
#[utoipa::path(
    post,
    path = "/api/auth/guest",
    tag = AUTH_TAG,
    responses(
        (status = 201, description = "Guest account created, session started", body = AuthResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn guest(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db, &state.tokens);

    let session = auth_service.guest_session().await?;

    Ok((StatusCode::CREATED, Json(session)).into_response())
}

/// Log out the current session
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    CurrentUser(account): CurrentUser,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db, &state.tokens);

    auth_service.logout(&account).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    )
        .into_response())
}
