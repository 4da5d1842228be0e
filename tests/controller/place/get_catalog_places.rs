use axum::{extract::State, http::StatusCode, response::IntoResponse};
use savora::controller::place::get_catalog_places;
use savora_test_utils::prelude::*;

use crate::util::TestSetupExt;

#[tokio::test]
/// Expect 200 success with cached and locally authored places together
async fn lists_whole_catalog() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let admin = test.accounts().insert_admin("Root", "root@example.com").await?;
    test.places_catalog()
        .insert_local_place("Casa Paco", admin.id)
        .await?;
    test.places_catalog()
        .insert_external_place("place-1", "La Taberna")
        .await?;

    let result = get_catalog_places(State(test.app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
