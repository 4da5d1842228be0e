use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::data::place::PlaceRepository;
use crate::data::search_history::SearchHistoryRepository;
use crate::error::Error;
use crate::model::place::{PlaceDetailsDto, PlaceDto, SearchResultDto, SOURCE_LOCAL};
use crate::places::PlacesClient;

/// Provider categories considered food venues; everything else is dropped
/// from search results.
const FOOD_CATEGORIES: [&str; 9] = [
    "restaurant",
    "cafe",
    "bar",
    "bakery",
    "food",
    "meal_takeaway",
    "meal_delivery",
    "liquor_store",
    "night_club",
];

/// How many distinct terms the search history endpoint returns.
const RECENT_SEARCH_LIMIT: usize = 10;

/// Search, detail lookups and the local catalog.
///
/// Search queries the provider and folds in matching catalog rows. Unlike
/// the favorite flow there is no retry here: when the provider is down the
/// search degrades to local results instead of making the user wait.
pub struct PlaceService<'a> {
    db: &'a DatabaseConnection,
    places: &'a PlacesClient,
}

impl<'a> PlaceService<'a> {
    pub fn new(db: &'a DatabaseConnection, places: &'a PlacesClient) -> Self {
        Self { db, places }
    }

    /// Runs a text search and merges catalog matches into the results.
    ///
    /// Provider results come first, filtered to food categories. Catalog
    /// rows matching the query by name are appended unless the provider
    /// already returned the same place. The term lands in the account's
    /// search history when the caller has one.
    pub async fn search(
        &self,
        account_id: Option<i32>,
        query: &str,
    ) -> Result<Vec<SearchResultDto>, Error> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(account_id) = account_id {
            SearchHistoryRepository::new(self.db)
                .record(account_id, query)
                .await?;
        }

        let provider_results = match self.places.text_search(query).await {
            Ok(results) => results,
            Err(err) => {
                tracing::warn!(query = %query, "provider search failed, serving local catalog only: {err}");
                Vec::new()
            }
        };

        let mut seen: HashSet<String> = HashSet::new();
        let mut results: Vec<SearchResultDto> = Vec::new();

        for summary in provider_results {
            // Results without a type list are kept; hiding data beats
            // guessing wrong.
            let is_food = summary
                .types
                .as_ref()
                .map(|types| types.iter().any(|t| FOOD_CATEGORIES.contains(&t.as_str())))
                .unwrap_or(true);
            if !is_food {
                continue;
            }

            seen.insert(summary.place_id.clone());
            results.push(SearchResultDto::from(summary));
        }

        for place in PlaceRepository::new(self.db).search_by_name(query).await? {
            if let Some(external_id) = &place.external_id {
                if seen.contains(external_id) {
                    continue;
                }
            }
            results.push(SearchResultDto::from(place));
        }

        Ok(results)
    }

    /// Full details for one place. Locally authored places are served from
    /// the catalog; everything else goes to the provider, without retry.
    pub async fn details(&self, external_id: &str) -> Result<PlaceDetailsDto, Error> {
        if let Some(place) = PlaceRepository::new(self.db)
            .find_by_external_id(external_id)
            .await?
        {
            if place.source == SOURCE_LOCAL {
                return Ok(PlaceDetailsDto::from(place));
            }
        }

        let details = self.places.place_details(external_id).await?;

        Ok(PlaceDetailsDto::from_details(external_id, details))
    }

    /// Every place the catalog knows about, cached and locally authored.
    pub async fn catalog_places(&self) -> Result<Vec<PlaceDto>, Error> {
        Ok(PlaceRepository::new(self.db)
            .list_all()
            .await?
            .into_iter()
            .map(PlaceDto::from)
            .collect())
    }

    /// The administrator-authored part of the catalog.
    pub async fn local_places(&self) -> Result<Vec<PlaceDto>, Error> {
        Ok(PlaceRepository::new(self.db)
            .list_local()
            .await?
            .into_iter()
            .map(PlaceDto::from)
            .collect())
    }

    /// The account's recent distinct search terms, newest first.
    pub async fn recent_searches(&self, account_id: i32) -> Result<Vec<String>, Error> {
        Ok(SearchHistoryRepository::new(self.db)
            .recent_terms(account_id, RECENT_SEARCH_LIMIT)
            .await?)
    }
}
