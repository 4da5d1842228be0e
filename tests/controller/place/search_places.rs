use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use savora::controller::{
    place::{search_places, SearchParams},
    util::current_user::CurrentUser,
};
use savora_test_utils::prelude::*;

use crate::util::TestSetupExt;

fn params(query: &str) -> Query<SearchParams> {
    Query(SearchParams {
        query: query.to_string(),
    })
}

#[tokio::test]
/// Expect 200 success with provider results merged into the catalog
async fn returns_merged_results() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let account = test
        .accounts()
        .insert_account("Alice", "alice@example.com")
        .await?;
    let admin = test.accounts().insert_admin("Root", "root@example.com").await?;
    test.places_catalog()
        .insert_local_place("Casa Paco", admin.id)
        .await?;
    let mock = test
        .places()
        .create_search_endpoint(vec![("place-1", "Tapas Bar"), ("place-2", "Sushi Go")], 1);

    let result = search_places(
        State(test.app_state()),
        Some(CurrentUser(account)),
        params("dinner"),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    mock.assert();

    Ok(())
}

#[tokio::test]
/// Expect 200 success for a request without any session
async fn returns_results_for_anonymous_caller() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let mock = test
        .places()
        .create_search_endpoint(vec![("place-1", "Tapas Bar")], 1);

    let result = search_places(State(test.app_state()), None, params("tapas")).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    mock.assert();

    Ok(())
}

#[tokio::test]
/// Expect 200 success from the catalog alone when the provider errors
async fn degrades_to_catalog_when_provider_fails() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let account = test
        .accounts()
        .insert_account("Alice", "alice@example.com")
        .await?;
    let mock = test
        .places()
        .create_search_status_endpoint("REQUEST_DENIED", 1);

    let result = search_places(
        State(test.app_state()),
        Some(CurrentUser(account)),
        params("dinner"),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    mock.assert();

    Ok(())
}

#[tokio::test]
/// Expect 200 success without touching the provider for a blank query
async fn skips_provider_for_blank_query() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let account = test
        .accounts()
        .insert_account("Alice", "alice@example.com")
        .await?;
    let mock = test.places().create_search_endpoint(vec![], 0);

    let result = search_places(
        State(test.app_state()),
        Some(CurrentUser(account)),
        params("  "),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    mock.assert();

    Ok(())
}
