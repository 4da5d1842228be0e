use axum::{extract::State, http::StatusCode, response::IntoResponse};
use savora::controller::auth::guest;
use savora_test_utils::prelude::*;

use crate::util::TestSetupExt;

#[tokio::test]
/// Expect 201 created with a throwaway guest session
async fn returns_created_guest_session() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;

    let result = guest(State(test.app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error when required database tables dont exist
async fn returns_error_when_tables_dont_exist() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = guest(State(test.app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
