use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn favorites<'a>(&'a mut self) -> FavoriteFixtures<'a> {
        FavoriteFixtures { setup: self }
    }
}

pub struct FavoriteFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> FavoriteFixtures<'a> {
    pub async fn insert_favorite(
        &self,
        account_id: i32,
        place_id: i32,
        external_id: Option<&str>,
    ) -> Result<entity::favorite::Model, TestError> {
        Ok(
            entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                account_id: ActiveValue::Set(account_id),
                place_id: ActiveValue::Set(place_id),
                external_id: ActiveValue::Set(external_id.map(str::to_string)),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}
