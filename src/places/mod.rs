//! HTTP client for the external places provider.
//!
//! The provider answers text searches and per-place detail lookups. Responses
//! carry their own `status` field on top of the HTTP status; both layers are
//! mapped into [`PlacesError`] so callers can treat the provider uniformly.

pub mod model;

use crate::error::places::PlacesError;
use model::{DetailsResponse, PlaceDetails, PlaceSummary, SearchResponse};

static DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

#[derive(Clone)]
pub struct PlacesClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    region: Option<String>,
}

impl PlacesClient {
    pub fn builder() -> PlacesClientBuilder {
        PlacesClientBuilder {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            region: None,
        }
    }

    /// Fetches full details for a single place.
    ///
    /// A payload whose status is OK but whose result lacks a name is treated
    /// as a failure; downstream callers persist the name unconditionally.
    pub async fn place_details(&self, external_id: &str) -> Result<PlaceDetails, PlacesError> {
        let url = format!("{}/details/json", self.base_url);

        tracing::debug!(external_id = %external_id, "fetching place details");

        let response = self
            .http
            .get(&url)
            .query(&[("place_id", external_id), ("key", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let body: DetailsResponse = response.json().await?;

        match body.status.as_str() {
            "OK" => {}
            "NOT_FOUND" | "ZERO_RESULTS" => {
                return Err(PlacesError::NotFound(external_id.to_string()))
            }
            "OVER_QUERY_LIMIT" => return Err(PlacesError::RateLimited),
            status => {
                return Err(PlacesError::Status {
                    status: status.to_string(),
                    message: body.error_message.unwrap_or_default(),
                })
            }
        }

        let details = body
            .result
            .ok_or_else(|| PlacesError::MissingName(external_id.to_string()))?;

        if details.name.is_none() {
            return Err(PlacesError::MissingName(external_id.to_string()));
        }

        Ok(details)
    }

    /// Runs a text search against the provider.
    ///
    /// When a region is configured the query is biased by appending it to the
    /// search text. Zero results are a valid answer, not an error.
    pub async fn text_search(&self, query: &str) -> Result<Vec<PlaceSummary>, PlacesError> {
        let url = format!("{}/textsearch/json", self.base_url);
        let query_text = match &self.region {
            Some(region) => format!("{} in {}", query, region),
            None => query.to_string(),
        };

        tracing::debug!(query = %query_text, "running place text search");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("query", query_text.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: SearchResponse = response.json().await?;

        match body.status.as_str() {
            "OK" | "ZERO_RESULTS" => Ok(body.results),
            "OVER_QUERY_LIMIT" => Err(PlacesError::RateLimited),
            status => Err(PlacesError::Status {
                status: status.to_string(),
                message: body.error_message.unwrap_or_default(),
            }),
        }
    }
}

pub struct PlacesClientBuilder {
    base_url: String,
    api_key: String,
    region: Option<String>,
}

impl PlacesClientBuilder {
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn api_key(mut self, api_key: &str) -> Self {
        self.api_key = api_key.to_string();
        self
    }

    pub fn region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }

    pub fn build(self) -> PlacesClient {
        PlacesClient {
            http: reqwest::Client::new(),
            base_url: self.base_url,
            api_key: self.api_key,
            region: self.region,
        }
    }
}
