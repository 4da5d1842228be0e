use axum::{extract::State, http::StatusCode, response::IntoResponse};
use savora::{
    controller::{auth::logout, util::current_user::CurrentUser},
    data::account::AccountRepository,
};
use savora_test_utils::prelude::*;

use crate::util::TestSetupExt;

#[tokio::test]
/// Expect 200 success and the guest row to be gone after guest logout
async fn deletes_guest_account_on_logout() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let guest = test.accounts().insert_guest().await?;

    let result = logout(State(test.app_state()), CurrentUser(guest.clone())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = AccountRepository::new(&test.state.db)
        .find_by_id(guest.id)
        .await;
    assert!(matches!(stored, Ok(None)));

    Ok(())
}

#[tokio::test]
/// Expect 200 success with the durable account left in place
async fn keeps_durable_account_on_logout() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let account = test
        .accounts()
        .insert_account("Alice", "alice@example.com")
        .await?;

    let result = logout(State(test.app_state()), CurrentUser(account.clone())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = AccountRepository::new(&test.state.db)
        .find_by_id(account.id)
        .await;
    assert!(matches!(stored, Ok(Some(_))));

    Ok(())
}
