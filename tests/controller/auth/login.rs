use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use savora::{controller::auth::login, model::auth::LoginDto};
use savora_test_utils::{constant::TEST_PASSWORD, prelude::*};

use crate::util::TestSetupExt;

fn form(email: &str, password: &str) -> LoginDto {
    LoginDto {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
/// Expect 200 success with a session for a correct password
async fn returns_success_for_correct_password() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    test.accounts()
        .insert_account("Alice", "alice@example.com")
        .await?;

    let result = login(
        State(test.app_state()),
        Json(form("alice@example.com", TEST_PASSWORD)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized for a wrong password
async fn returns_unauthorized_for_wrong_password() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    test.accounts()
        .insert_account("Alice", "alice@example.com")
        .await?;

    let result = login(
        State(test.app_state()),
        Json(form("alice@example.com", "wrong")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized for an unknown email
async fn returns_unauthorized_for_unknown_email() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;

    let result = login(
        State(test.app_state()),
        Json(form("nobody@example.com", "whatever")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 403 forbidden for a banned account even with a correct password
async fn returns_forbidden_for_banned_account() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    test.accounts()
        .insert_banned_account("Mallory", "mallory@example.com")
        .await?;

    let result = login(
        State(test.app_state()),
        Json(form("mallory@example.com", TEST_PASSWORD)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect 403 forbidden once the third wrong password locks the account
async fn returns_forbidden_once_locked() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    test.accounts()
        .insert_account("Alice", "alice@example.com")
        .await?;
    let state = test.app_state();

    for _ in 0..2 {
        let result = login(
            State(state.clone()),
            Json(form("alice@example.com", "wrong")),
        )
        .await;
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    let third = login(
        State(state.clone()),
        Json(form("alice@example.com", "wrong")),
    )
    .await;
    let resp = third.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // The lock holds even for the correct password
    let with_password = login(
        State(state),
        Json(form("alice@example.com", TEST_PASSWORD)),
    )
    .await;
    let resp = with_password.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
