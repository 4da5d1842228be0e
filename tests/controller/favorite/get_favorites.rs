use axum::{extract::State, http::StatusCode, response::IntoResponse};
use savora::controller::{favorite::get_favorites, util::current_user::CurrentUser};
use savora_test_utils::prelude::*;

use crate::util::TestSetupExt;

#[tokio::test]
/// Expect 200 success with the caller's saved favorites
async fn lists_saved_favorites() -> Result<(), TestError> {
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

    let result = get_favorites(State(test.app_state()), CurrentUser(account)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 200 success and an empty list for an account without favorites
async fn returns_success_without_favorites() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let account = test
        .accounts()
        .insert_account("Alice", "alice@example.com")
        .await?;

    let result = get_favorites(State(test.app_state()), CurrentUser(account)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
