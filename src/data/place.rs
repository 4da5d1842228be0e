use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func, OnConflict},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ExprTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use entity::place;
use entity::prelude::Place;

use crate::model::place::{SOURCE_EXTERNAL, SOURCE_LOCAL};
use crate::places::model::PlaceDetails;

/// Fields for an administrator-authored catalog entry.
pub struct NewLocalPlace {
    pub external_id: String,
    pub name: String,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub category: Option<String>,
    pub price_level: Option<i32>,
    pub photo_ref: Option<String>,
    pub created_by: i32,
}

pub struct PlaceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlaceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, place_id: i32) -> Result<Option<place::Model>, DbErr> {
        Place::find_by_id(place_id).one(self.db).await
    }

    pub async fn find_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<place::Model>, DbErr> {
        Place::find()
            .filter(place::Column::ExternalId.eq(external_id))
            .one(self.db)
            .await
    }

    /// Caches provider details under the given external id, or returns the
    /// already cached row when another request got there first. The insert
    /// does nothing on conflict so cached fields are never overwritten.
    ///
    /// The caller validates that `details` carries a name before persisting.
    pub async fn insert_or_fetch_external(
        &self,
        external_id: &str,
        details: &PlaceDetails,
    ) -> Result<place::Model, DbErr> {
        let category = details
            .types
            .as_ref()
            .and_then(|types| types.first().cloned());
        let photo_ref = details
            .photos
            .as_ref()
            .and_then(|photos| photos.first().map(|p| p.photo_reference.clone()));

        let new_place = place::ActiveModel {
            external_id: ActiveValue::Set(Some(external_id.to_string())),
            name: ActiveValue::Set(details.name.clone().unwrap_or_default()),
            address: ActiveValue::Set(details.formatted_address.clone()),
            latitude: ActiveValue::Set(details.geometry.as_ref().map(|g| g.location.lat)),
            longitude: ActiveValue::Set(details.geometry.as_ref().map(|g| g.location.lng)),
            rating: ActiveValue::Set(details.rating),
            rating_count: ActiveValue::Set(details.user_ratings_total),
            price_level: ActiveValue::Set(details.price_level),
            open_now: ActiveValue::Set(details.opening_hours.as_ref().and_then(|h| h.open_now)),
            category: ActiveValue::Set(category),
            photo_ref: ActiveValue::Set(photo_ref),
            source: ActiveValue::Set(SOURCE_EXTERNAL.to_string()),
            created_by: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        let insert = Place::insert(new_place).on_conflict(
            OnConflict::column(place::Column::ExternalId)
                .do_nothing()
                .to_owned(),
        );

        match insert.exec_with_returning(self.db).await {
            Ok(place) => Ok(place),
            Err(DbErr::RecordNotInserted) => {
                let Some(existing) = self.find_by_external_id(external_id).await? else {
                    return Err(DbErr::RecordNotInserted);
                };
                Ok(existing)
            }
            Err(err) => Err(err),
        }
    }

    pub async fn create_local(&self, new_place: NewLocalPlace) -> Result<place::Model, DbErr> {
        let local = place::ActiveModel {
            external_id: ActiveValue::Set(Some(new_place.external_id)),
            name: ActiveValue::Set(new_place.name),
            address: ActiveValue::Set(new_place.address),
            latitude: ActiveValue::Set(new_place.latitude),
            longitude: ActiveValue::Set(new_place.longitude),
            rating: ActiveValue::Set(None),
            rating_count: ActiveValue::Set(None),
            price_level: ActiveValue::Set(new_place.price_level),
            open_now: ActiveValue::Set(None),
            category: ActiveValue::Set(new_place.category),
            photo_ref: ActiveValue::Set(new_place.photo_ref),
            source: ActiveValue::Set(SOURCE_LOCAL.to_string()),
            created_by: ActiveValue::Set(Some(new_place.created_by)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        local.insert(self.db).await
    }

    pub async fn list_all(&self) -> Result<Vec<place::Model>, DbErr> {
        Place::find()
            .order_by_asc(place::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn list_local(&self) -> Result<Vec<place::Model>, DbErr> {
        Place::find()
            .filter(place::Column::Source.eq(SOURCE_LOCAL))
            .order_by_asc(place::Column::Name)
            .all(self.db)
            .await
    }

    /// Case-insensitive substring match on the place name. LIKE is
    /// case-sensitive on Postgres, so both sides are lowered.
    pub async fn search_by_name(&self, term: &str) -> Result<Vec<place::Model>, DbErr> {
        let pattern = format!("%{}%", term.to_lowercase());

        Place::find()
            .filter(Expr::expr(Func::lower(Expr::col(place::Column::Name))).like(pattern))
            .order_by_asc(place::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        Place::find().count(self.db).await
    }

    pub async fn count_by_source(&self, source: &str) -> Result<u64, DbErr> {
        Place::find()
            .filter(place::Column::Source.eq(source))
            .count(self.db)
            .await
    }
}
