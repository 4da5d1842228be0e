use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::{header, request::Parts},
};

use entity::account;

use crate::data::account::AccountRepository;
use crate::error::{admin::AdminError, auth::AuthError, Error};
use crate::model::account::Role;
use crate::model::app::AppState;

/// The account behind the request's bearer token.
///
/// Verifying the token yields the bound email; the account is then loaded
/// fresh so bans and deletions take effect on the very next request instead
/// of when the token expires.
///
/// As `Option<CurrentUser>` the session becomes optional: a request without
/// an `Authorization` header resolves to `None`, while a present but invalid
/// token is still rejected.
pub struct CurrentUser(pub account::Model);

/// A [`CurrentUser`] that must also hold the administrator role.
pub struct AdminUser(pub account::Model);

async fn account_from_bearer(parts: &Parts, state: &AppState) -> Result<account::Model, Error> {
    let header = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let token = header.strip_prefix("Bearer ").ok_or(AuthError::MissingToken)?;

    let email = state.tokens.verify(token)?;

    let Some(account) = AccountRepository::new(&state.db)
        .find_by_email(&email)
        .await?
    else {
        return Err(AuthError::InvalidToken(format!("no account for {email}")).into());
    };

    if account.banned {
        return Err(AuthError::Banned(account.email).into());
    }

    Ok(account)
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(CurrentUser(account_from_bearer(parts, state).await?))
    }
}

impl OptionalFromRequestParts<AppState> for CurrentUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        if parts.headers.get(header::AUTHORIZATION).is_none() {
            return Ok(None);
        }

        Ok(Some(CurrentUser(account_from_bearer(parts, state).await?)))
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let account = account_from_bearer(parts, state).await?;

        if account.role != Role::Admin.as_str() {
            return Err(AdminError::NotAdmin(account.id).into());
        }

        Ok(AdminUser(account))
    }
}
