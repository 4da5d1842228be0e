use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::places::model::{PlaceDetails, PlaceSummary};

/// Catalog rows cached from the places provider.
pub const SOURCE_EXTERNAL: &str = "EXTERNAL";
/// Catalog rows authored by administrators.
pub const SOURCE_LOCAL: &str = "LOCAL";

/// A place from the local catalog
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct PlaceDto {
    pub external_id: Option<String>,
    pub name: String,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub rating: Option<f64>,
    pub rating_count: Option<i32>,
    pub price_level: Option<i32>,
    pub open_now: Option<bool>,
    pub category: Option<String>,
    pub photo_ref: Option<String>,
    pub source: String,
    pub created_at: NaiveDateTime,
}

impl From<entity::place::Model> for PlaceDto {
    fn from(model: entity::place::Model) -> Self {
        Self {
            external_id: model.external_id,
            name: model.name,
            address: model.address,
            latitude: model.latitude,
            longitude: model.longitude,
            rating: model.rating,
            rating_count: model.rating_count,
            price_level: model.price_level,
            open_now: model.open_now,
            category: model.category,
            photo_ref: model.photo_ref,
            source: model.source,
            created_at: model.created_at,
        }
    }
}

/// A search result, either fresh from the provider or from the local catalog
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResultDto {
    pub external_id: Option<String>,
    pub name: String,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub rating: Option<f64>,
    pub rating_count: Option<i32>,
    pub price_level: Option<i32>,
    pub open_now: Option<bool>,
    pub category: Option<String>,
    pub photo_ref: Option<String>,
    pub source: String,
}

impl From<PlaceSummary> for SearchResultDto {
    fn from(summary: PlaceSummary) -> Self {
        let category = summary
            .types
            .as_ref()
            .and_then(|types| types.first().cloned());
        let photo_ref = summary
            .photos
            .as_ref()
            .and_then(|photos| photos.first().map(|p| p.photo_reference.clone()));

        Self {
            external_id: Some(summary.place_id),
            name: summary.name.unwrap_or_default(),
            address: summary.formatted_address,
            latitude: summary.geometry.as_ref().map(|g| g.location.lat),
            longitude: summary.geometry.as_ref().map(|g| g.location.lng),
            rating: summary.rating,
            rating_count: summary.user_ratings_total,
            price_level: summary.price_level,
            open_now: summary.opening_hours.and_then(|h| h.open_now),
            category,
            photo_ref,
            source: SOURCE_EXTERNAL.to_string(),
        }
    }
}

impl From<entity::place::Model> for SearchResultDto {
    fn from(model: entity::place::Model) -> Self {
        Self {
            external_id: model.external_id,
            name: model.name,
            address: model.address,
            latitude: model.latitude,
            longitude: model.longitude,
            rating: model.rating,
            rating_count: model.rating_count,
            price_level: model.price_level,
            open_now: model.open_now,
            category: model.category,
            photo_ref: model.photo_ref,
            source: model.source,
        }
    }
}

/// Full details for a single place, served from the provider on demand
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct PlaceDetailsDto {
    pub external_id: String,
    pub name: String,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub rating: Option<f64>,
    pub rating_count: Option<i32>,
    pub price_level: Option<i32>,
    pub category: Option<String>,
    pub photo_ref: Option<String>,
    pub open_now: Option<bool>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub weekday_text: Option<Vec<String>>,
    pub reviews: Vec<ProviderReviewDto>,
}

impl PlaceDetailsDto {
    pub fn from_details(external_id: &str, details: PlaceDetails) -> Self {
        let category = details
            .types
            .as_ref()
            .and_then(|types| types.first().cloned());
        let photo_ref = details
            .photos
            .as_ref()
            .and_then(|photos| photos.first().map(|p| p.photo_reference.clone()));
        let reviews = details
            .reviews
            .unwrap_or_default()
            .into_iter()
            .map(|review| ProviderReviewDto {
                author: review.author_name,
                rating: review.rating,
                text: review.text,
                relative_time: review.relative_time_description,
            })
            .collect();

        Self {
            external_id: external_id.to_string(),
            name: details.name.unwrap_or_default(),
            address: details.formatted_address,
            latitude: details.geometry.as_ref().map(|g| g.location.lat),
            longitude: details.geometry.as_ref().map(|g| g.location.lng),
            rating: details.rating,
            rating_count: details.user_ratings_total,
            price_level: details.price_level,
            category,
            photo_ref,
            open_now: details.opening_hours.as_ref().and_then(|h| h.open_now),
            phone: details.formatted_phone_number,
            website: details.website,
            weekday_text: details.opening_hours.and_then(|h| h.weekday_text),
            reviews,
        }
    }
}

/// Details assembled from a catalog row instead of a provider payload.
/// Locally authored places have no provider-side extras to offer.
impl From<entity::place::Model> for PlaceDetailsDto {
    fn from(model: entity::place::Model) -> Self {
        Self {
            external_id: model.external_id.unwrap_or_default(),
            name: model.name,
            address: model.address,
            latitude: model.latitude,
            longitude: model.longitude,
            rating: model.rating,
            rating_count: model.rating_count,
            price_level: model.price_level,
            category: model.category,
            photo_ref: model.photo_ref,
            open_now: model.open_now,
            phone: None,
            website: None,
            weekday_text: None,
            reviews: Vec::new(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct ProviderReviewDto {
    pub author: Option<String>,
    pub rating: Option<f64>,
    pub text: Option<String>,
    pub relative_time: Option<String>,
}

/// Body for the admin-authored place creation endpoint
#[derive(Deserialize, ToSchema)]
pub struct NewPlaceDto {
    pub name: String,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub category: Option<String>,
    pub price_level: Option<i32>,
    pub photo_ref: Option<String>,
    /// Optional stable identifier; generated when absent
    pub external_id: Option<String>,
}
