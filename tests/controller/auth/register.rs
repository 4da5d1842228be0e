use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use savora::{controller::auth::register, model::auth::RegisterDto};
use savora_test_utils::prelude::*;

use crate::util::TestSetupExt;

fn form(name: &str, email: &str, pin: &str) -> RegisterDto {
    RegisterDto {
        name: name.to_string(),
        email: email.to_string(),
        password: "hunter2!".to_string(),
        pin: pin.to_string(),
    }
}

#[tokio::test]
/// Expect 201 created with a session for a new registration
async fn returns_created_for_new_account() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;

    let result = register(
        State(test.app_state()),
        Json(form("Alice", "alice@example.com", "1234")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
/// Expect 409 conflict for an email that is already registered
async fn returns_conflict_for_duplicate_email() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    test.accounts()
        .insert_account("Alice", "alice@example.com")
        .await?;

    let result = register(
        State(test.app_state()),
        Json(form("Alice2", "alice@example.com", "1234")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request for a recovery PIN outside the accepted length
async fn returns_bad_request_for_short_pin() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;

    let result = register(
        State(test.app_state()),
        Json(form("Alice", "alice@example.com", "12")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error when required database tables dont exist
async fn returns_error_when_tables_dont_exist() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = register(
        State(test.app_state()),
        Json(form("Alice", "alice@example.com", "1234")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
