use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use savora::{
    controller::{admin::delete_account, util::current_user::AdminUser},
    data::account::AccountRepository,
};
use savora_test_utils::prelude::*;

use crate::util::TestSetupExt;

#[tokio::test]
/// Expect 200 success and the account row to be gone
async fn deletes_regular_user() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let admin = test.accounts().insert_admin("Root", "root@example.com").await?;
    let target = test
        .accounts()
        .insert_account("Alice", "alice@example.com")
        .await?;

    let result = delete_account(State(test.app_state()), AdminUser(admin), Path(target.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = AccountRepository::new(&test.state.db)
        .find_by_id(target.id)
        .await;
    assert!(matches!(stored, Ok(None)));

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request when an administrator deletes itself
async fn rejects_self_deletion() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let admin = test.accounts().insert_admin("Root", "root@example.com").await?;

    let result = delete_account(
        State(test.app_state()),
        AdminUser(admin.clone()),
        Path(admin.id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 403 forbidden when deleting another administrator
async fn rejects_admin_target() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let admin = test.accounts().insert_admin("Root", "root@example.com").await?;
    let other = test
        .accounts()
        .insert_admin("Deputy", "deputy@example.com")
        .await?;

    let result = delete_account(State(test.app_state()), AdminUser(admin), Path(other.id)).await;

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

    let result = delete_account(State(test.app_state()), AdminUser(admin), Path(9999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
