use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use entity::prelude::{Favorite, Place};
use entity::{favorite, place};

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Persists the favorite. A duplicate (account, place) pair violates the
    /// unique index and surfaces as a database error for the caller to map.
    pub async fn create(
        &self,
        account_id: i32,
        place_id: i32,
        external_id: Option<&str>,
    ) -> Result<favorite::Model, DbErr> {
        let favorite = favorite::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            place_id: ActiveValue::Set(place_id),
            external_id: ActiveValue::Set(external_id.map(str::to_string)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn find(
        &self,
        account_id: i32,
        place_id: i32,
    ) -> Result<Option<favorite::Model>, DbErr> {
        Favorite::find()
            .filter(favorite::Column::AccountId.eq(account_id))
            .filter(favorite::Column::PlaceId.eq(place_id))
            .one(self.db)
            .await
    }

    pub async fn exists(&self, account_id: i32, place_id: i32) -> Result<bool, DbErr> {
        Ok(self.find(account_id, place_id).await?.is_some())
    }

    pub async fn delete(&self, account_id: i32, place_id: i32) -> Result<DeleteResult, DbErr> {
        Favorite::delete_many()
            .filter(favorite::Column::AccountId.eq(account_id))
            .filter(favorite::Column::PlaceId.eq(place_id))
            .exec(self.db)
            .await
    }

    /// Favorites for one account joined with their catalog rows, newest
    /// first. The place side is optional so callers decide how to treat
    /// favorites whose catalog row is gone.
    pub async fn list_with_places(
        &self,
        account_id: i32,
    ) -> Result<Vec<(favorite::Model, Option<place::Model>)>, DbErr> {
        Favorite::find()
            .find_also_related(Place)
            .filter(favorite::Column::AccountId.eq(account_id))
            .order_by_desc(favorite::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        Favorite::find().count(self.db).await
    }
}
