use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use savora::{controller::auth::unlock, model::auth::UnlockDto};
use savora_test_utils::{constant::TEST_PIN, prelude::*};

use crate::util::TestSetupExt;

fn form(email: &str, pin: &str) -> UnlockDto {
    UnlockDto {
        email: email.to_string(),
        pin: pin.to_string(),
    }
}

#[tokio::test]
/// Expect 200 success with a fresh session for the correct PIN
async fn returns_success_for_correct_pin() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    test.accounts()
        .insert_account("Alice", "alice@example.com")
        .await?;

    let result = unlock(
        State(test.app_state()),
        Json(form("alice@example.com", TEST_PIN)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request for a wrong PIN
async fn returns_bad_request_for_wrong_pin() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    test.accounts()
        .insert_account("Alice", "alice@example.com")
        .await?;

    let result = unlock(
        State(test.app_state()),
        Json(form("alice@example.com", "0000")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for an unknown email
async fn returns_not_found_for_unknown_email() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;

    let result = unlock(
        State(test.app_state()),
        Json(form("nobody@example.com", TEST_PIN)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
