//! Place catalog fixture utilities.
//!
//! Inserts place rows as the application would cache or create them: rows
//! sourced from the external provider, and locally curated rows created by
//! administrators.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn places_catalog<'a>(&'a mut self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> CatalogFixtures<'a> {
    /// Insert a place row as cached from the external provider.
    pub async fn insert_external_place(
        &self,
        external_id: &str,
        name: &str,
    ) -> Result<entity::place::Model, TestError> {
        Ok(entity::prelude::Place::insert(entity::place::ActiveModel {
            external_id: ActiveValue::Set(Some(external_id.to_string())),
            name: ActiveValue::Set(name.to_string()),
            address: ActiveValue::Set(Some("Calle Mayor 1, Madrid".to_string())),
            latitude: ActiveValue::Set(Some(40.4168)),
            longitude: ActiveValue::Set(Some(-3.7038)),
            rating: ActiveValue::Set(Some(4.5)),
            rating_count: ActiveValue::Set(Some(120)),
            price_level: ActiveValue::Set(Some(2)),
            open_now: ActiveValue::Set(None),
            category: ActiveValue::Set(Some("restaurant".to_string())),
            photo_ref: ActiveValue::Set(Some("photo-ref-1".to_string())),
            source: ActiveValue::Set("EXTERNAL".to_string()),
            created_by: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    /// Insert a locally curated place row created by the given account.
    ///
    /// The external id is generated the way the application generates ids
    /// for local places.
    pub async fn insert_local_place(
        &self,
        name: &str,
        created_by: i32,
    ) -> Result<entity::place::Model, TestError> {
        let external_id = format!("LOCAL_{}_{}", Utc::now().timestamp_micros(), created_by);

        Ok(entity::prelude::Place::insert(entity::place::ActiveModel {
            external_id: ActiveValue::Set(Some(external_id)),
            name: ActiveValue::Set(name.to_string()),
            address: ActiveValue::Set(Some("Calle de la Cava Baja 30, Madrid".to_string())),
            latitude: ActiveValue::Set(Some(40.4114)),
            longitude: ActiveValue::Set(Some(-3.7083)),
            rating: ActiveValue::Set(None),
            rating_count: ActiveValue::Set(None),
            price_level: ActiveValue::Set(None),
            open_now: ActiveValue::Set(None),
            category: ActiveValue::Set(Some("restaurant".to_string())),
            photo_ref: ActiveValue::Set(None),
            source: ActiveValue::Set("LOCAL".to_string()),
            created_by: ActiveValue::Set(Some(created_by)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }
}
