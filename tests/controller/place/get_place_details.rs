use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use savora::controller::place::get_place_details;
use savora_test_utils::prelude::*;

use crate::util::TestSetupExt;

#[tokio::test]
/// Expect 200 success with the provider's details payload
async fn returns_provider_details() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let mock = test
        .places()
        .create_details_endpoint("place-1", "La Taberna", 1);

    let result = get_place_details(State(test.app_state()), Path("place-1".to_string())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    mock.assert();

    Ok(())
}

#[tokio::test]
/// Expect 200 success from the catalog for a locally authored place
async fn serves_local_place_without_provider() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let admin = test.accounts().insert_admin("Root", "root@example.com").await?;
    let place = test
        .places_catalog()
        .insert_local_place("Casa Paco", admin.id)
        .await?;

    let result = get_place_details(
        State(test.app_state()),
        Path(place.external_id.clone().unwrap()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found when the provider has no such place
async fn returns_not_found_for_unknown_place() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let mock = test
        .places()
        .create_details_status_endpoint("no-such-place", "NOT_FOUND", 1);

    let result = get_place_details(
        State(test.app_state()),
        Path("no-such-place".to_string()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    mock.assert();

    Ok(())
}
