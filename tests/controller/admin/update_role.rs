use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use savora::{
    controller::{admin::update_role, util::current_user::AdminUser},
    model::account::RoleUpdateDto,
};
use savora_test_utils::prelude::*;

use crate::util::TestSetupExt;

fn form(role: &str) -> RoleUpdateDto {
    RoleUpdateDto {
        role: role.to_string(),
    }
}

#[tokio::test]
/// Expect 200 success when promoting a user to administrator
async fn promotes_user() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let admin = test.accounts().insert_admin("Root", "root@example.com").await?;
    let target = test
        .accounts()
        .insert_account("Alice", "alice@example.com")
        .await?;

    let result = update_role(
        State(test.app_state()),
        AdminUser(admin),
        Path(target.id),
        Json(form("ADMIN")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request for a role outside the known set
async fn rejects_unknown_role() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let admin = test.accounts().insert_admin("Root", "root@example.com").await?;
    let target = test
        .accounts()
        .insert_account("Alice", "alice@example.com")
        .await?;

    let result = update_role(
        State(test.app_state()),
        AdminUser(admin),
        Path(target.id),
        Json(form("OVERLORD")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 403 forbidden when targeting another administrator
async fn rejects_admin_target() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let admin = test.accounts().insert_admin("Root", "root@example.com").await?;
    let other = test
        .accounts()
        .insert_admin("Deputy", "deputy@example.com")
        .await?;

    let result = update_role(
        State(test.app_state()),
        AdminUser(admin),
        Path(other.id),
        Json(form("USER")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for a missing account id
async fn returns_not_found_for_missing_target() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let admin = test.accounts().insert_admin("Root", "root@example.com").await?;

    let result = update_role(
        State(test.app_state()),
        AdminUser(admin),
        Path(9999),
        Json(form("USER")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
