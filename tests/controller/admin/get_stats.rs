use axum::{extract::State, http::StatusCode, response::IntoResponse};
use savora::controller::{admin::get_stats, util::current_user::AdminUser};
use savora_test_utils::prelude::*;

use crate::util::TestSetupExt;

#[tokio::test]
/// Expect 200 success with account and catalog counts
async fn returns_counts() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let admin = test.accounts().insert_admin("Root", "root@example.com").await?;
    test.accounts()
        .insert_account("Alice", "alice@example.com")
        .await?;
    test.places_catalog()
        .insert_external_place("place-1", "La Taberna")
        .await?;

    let result = get_stats(State(test.app_state()), AdminUser(admin)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
