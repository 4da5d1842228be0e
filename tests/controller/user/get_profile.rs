use axum::{http::StatusCode, response::IntoResponse};
use savora::controller::{user::get_profile, util::current_user::CurrentUser};
use savora_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 success with the caller's own profile
async fn returns_own_profile() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let account = test
        .accounts()
        .insert_account("Alice", "alice@example.com")
        .await?;

    let result = get_profile(CurrentUser(account)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
