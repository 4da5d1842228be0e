use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use savora::{
    controller::{admin::update_review_permission, util::current_user::AdminUser},
    model::account::ReviewPermissionUpdateDto,
};
use savora_test_utils::prelude::*;

use crate::util::TestSetupExt;

#[tokio::test]
/// Expect 200 success when revoking review permission
async fn revokes_review_permission() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let admin = test.accounts().insert_admin("Root", "root@example.com").await?;
    let target = test
        .accounts()
        .insert_account("Alice", "alice@example.com")
        .await?;

    let result = update_review_permission(
        State(test.app_state()),
        AdminUser(admin),
        Path(target.id),
        Json(ReviewPermissionUpdateDto { can_review: false }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

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

    let result = update_review_permission(
        State(test.app_state()),
        AdminUser(admin),
        Path(other.id),
        Json(ReviewPermissionUpdateDto { can_review: false }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
