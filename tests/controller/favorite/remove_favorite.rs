use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use savora::controller::{favorite::remove_favorite, util::current_user::CurrentUser};
use savora_test_utils::prelude::*;

use crate::util::TestSetupExt;

#[tokio::test]
/// Expect 200 success when removing a saved favorite
async fn removes_saved_favorite() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let account = test
        .accounts()
        .insert_account("Alice", "alice@example.com")
        .await?;
    let place = test
        .places_catalog()
        .insert_external_place("place-1", "La Taberna")
        .await?;
    test.favorites()
        .insert_favorite(account.id, place.id, Some("place-1"))
        .await?;

    let result = remove_favorite(
        State(test.app_state()),
        CurrentUser(account),
        Path("place-1".to_string()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for a place the catalog has never seen
async fn returns_not_found_for_unknown_place() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let account = test
        .accounts()
        .insert_account("Alice", "alice@example.com")
        .await?;

    let result = remove_favorite(
        State(test.app_state()),
        CurrentUser(account),
        Path("no-such-place".to_string()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
