use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct AddFavoriteDto {
    /// Provider place ID of the place to favorite
    pub external_id: String,
}

/// A favorite joined with the descriptive fields of its cached place
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub external_id: Option<String>,
    pub name: String,
    pub address: Option<String>,
    pub rating: Option<f64>,
    pub rating_count: Option<i32>,
    pub price_level: Option<i32>,
    pub category: Option<String>,
    pub photo_ref: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<(entity::favorite::Model, entity::place::Model)> for FavoriteDto {
    fn from((favorite, place): (entity::favorite::Model, entity::place::Model)) -> Self {
        Self {
            id: favorite.id,
            external_id: place.external_id,
            name: place.name,
            address: place.address,
            rating: place.rating,
            rating_count: place.rating_count,
            price_level: place.price_level,
            category: place.category,
            photo_ref: place.photo_ref,
            created_at: favorite.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct FavoriteStatusDto {
    pub favorite: bool,
}
