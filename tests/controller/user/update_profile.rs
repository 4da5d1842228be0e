use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use savora::{
    controller::{user::update_profile, util::current_user::CurrentUser},
    model::account::UpdateProfileDto,
};
use savora_test_utils::prelude::*;

use crate::util::TestSetupExt;

fn empty_form() -> UpdateProfileDto {
    UpdateProfileDto {
        name: None,
        email: None,
        profile_image_url: None,
        current_password: None,
        new_password: None,
    }
}

#[tokio::test]
/// Expect 200 success when renaming the account
async fn returns_success_for_rename() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let account = test
        .accounts()
        .insert_account("Alice", "alice@example.com")
        .await?;

    let form = UpdateProfileDto {
        name: Some("Alya".to_string()),
        ..empty_form()
    };
    let result = update_profile(State(test.app_state()), CurrentUser(account), Json(form)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 409 conflict when changing to an email that is already taken
async fn returns_conflict_for_taken_email() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    test.accounts()
        .insert_account("Alice", "alice@example.com")
        .await?;
    let bob = test.accounts().insert_account("Bob", "bob@example.com").await?;

    let form = UpdateProfileDto {
        email: Some("alice@example.com".to_string()),
        ..empty_form()
    };
    let result = update_profile(State(test.app_state()), CurrentUser(bob), Json(form)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request for a password change without the current password
async fn returns_bad_request_without_current_password() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let account = test
        .accounts()
        .insert_account("Alice", "alice@example.com")
        .await?;

    let form = UpdateProfileDto {
        new_password: Some("brand-new-password".to_string()),
        ..empty_form()
    };
    let result = update_profile(State(test.app_state()), CurrentUser(account), Json(form)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
