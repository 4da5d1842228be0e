use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use savora::{
    controller::{admin::create_place, util::current_user::AdminUser},
    model::place::NewPlaceDto,
};
use savora_test_utils::prelude::*;

use crate::util::TestSetupExt;

fn form(name: &str, external_id: Option<&str>) -> NewPlaceDto {
    NewPlaceDto {
        name: name.to_string(),
        address: Some("Calle Mayor 1, Madrid".to_string()),
        latitude: Some(40.4168),
        longitude: Some(-3.7038),
        category: Some("restaurant".to_string()),
        price_level: Some(2),
        photo_ref: None,
        external_id: external_id.map(str::to_string),
    }
}

#[tokio::test]
/// Expect 201 created for a new locally authored place
async fn returns_created_for_new_place() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let admin = test.accounts().insert_admin("Root", "root@example.com").await?;

    let result = create_place(
        State(test.app_state()),
        AdminUser(admin),
        Json(form("Casa Paco", None)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
/// Expect 409 conflict for an external id that already exists
async fn returns_conflict_for_existing_external_id() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let admin = test.accounts().insert_admin("Root", "root@example.com").await?;
    test.places_catalog()
        .insert_external_place("place-1", "La Taberna")
        .await?;

    let result = create_place(
        State(test.app_state()),
        AdminUser(admin),
        Json(form("Casa Paco", Some("place-1"))),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
