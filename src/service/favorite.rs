use sea_orm::{DatabaseConnection, SqlErr};

use entity::place;

use crate::data::favorite::FavoriteRepository;
use crate::data::place::PlaceRepository;
use crate::error::{favorite::FavoriteError, Error};
use crate::model::favorite::FavoriteDto;
use crate::places::model::PlaceDetails;
use crate::places::PlacesClient;
use crate::service::retry::RetryContext;

/// Favorite management over the place catalog.
///
/// Favoriting a place the catalog has never seen first pulls its details
/// from the provider, with retries, and caches them as a catalog row. The
/// favorite itself is guarded by a unique (account, place) index so a
/// concurrent double-submission cannot produce two rows.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
    places: &'a PlacesClient,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection, places: &'a PlacesClient) -> Self {
        Self { db, places }
    }

    /// Saves a place to the account's favorites, caching it first if needed.
    pub async fn add_favorite(
        &self,
        account_id: i32,
        external_id: &str,
    ) -> Result<FavoriteDto, Error> {
        let external_id = external_id.trim();
        if external_id.is_empty() {
            return Err(FavoriteError::MissingExternalId.into());
        }

        let place = self.resolve_place(external_id).await?;

        let favorites = FavoriteRepository::new(self.db);
        if favorites.exists(account_id, place.id).await? {
            return Err(FavoriteError::AlreadyExists {
                account_id,
                external_id: external_id.to_string(),
            }
            .into());
        }

        let favorite = match favorites.create(account_id, place.id, Some(external_id)).await {
            Ok(favorite) => favorite,
            // A concurrent double-submission slips past the pre-check and
            // lands on the unique index instead.
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(FavoriteError::AlreadyExists {
                    account_id,
                    external_id: external_id.to_string(),
                }
                .into());
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!(account_id = %account_id, external_id = %external_id, "favorite added");

        Ok(FavoriteDto::from((favorite, place)))
    }

    /// Removes a favorite. Succeeds even when the favorite was already gone,
    /// but the place itself must be known to the catalog.
    pub async fn remove_favorite(&self, account_id: i32, external_id: &str) -> Result<(), Error> {
        let Some(place) = PlaceRepository::new(self.db)
            .find_by_external_id(external_id)
            .await?
        else {
            return Err(FavoriteError::PlaceNotFound(external_id.to_string()).into());
        };

        let result = FavoriteRepository::new(self.db)
            .delete(account_id, place.id)
            .await?;

        tracing::debug!(
            account_id = %account_id,
            external_id = %external_id,
            rows = %result.rows_affected,
            "favorite removed"
        );

        Ok(())
    }

    /// Whether the account has favorited the place. A place the catalog has
    /// never seen is simply not a favorite.
    pub async fn is_favorite(&self, account_id: i32, external_id: &str) -> Result<bool, Error> {
        let Some(place) = PlaceRepository::new(self.db)
            .find_by_external_id(external_id)
            .await?
        else {
            return Ok(false);
        };

        Ok(FavoriteRepository::new(self.db)
            .exists(account_id, place.id)
            .await?)
    }

    /// The account's favorites with their cached place fields, newest first.
    /// Favorites whose catalog row has vanished are skipped rather than
    /// served half-empty.
    pub async fn list_favorites(&self, account_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        let favorites = FavoriteRepository::new(self.db)
            .list_with_places(account_id)
            .await?;

        Ok(favorites
            .into_iter()
            .filter_map(|(favorite, place)| {
                place.map(|place| FavoriteDto::from((favorite, place)))
            })
            .collect())
    }

    /// Returns the catalog row for the external id, fetching details from the
    /// provider and caching them when the catalog has no row yet.
    ///
    /// The fetched details are kept in the retry cache, so a transient
    /// database failure on the caching step does not refetch from the
    /// provider. When every attempt fails nothing is cached and the caller
    /// gets `ExternalUnavailable`.
    async fn resolve_place(&self, external_id: &str) -> Result<place::Model, Error> {
        if let Some(place) = PlaceRepository::new(self.db)
            .find_by_external_id(external_id)
            .await?
        {
            return Ok(place);
        }

        let mut ctx: RetryContext<Option<PlaceDetails>> = RetryContext::new();
        let db = self.db.clone();
        let client = self.places.clone();
        let id = external_id.to_string();

        let result = ctx
            .execute_with_retry(&format!("details fetch for place {external_id}"), |cache| {
                let db = db.clone();
                let client = client.clone();
                let id = id.clone();

                Box::pin(async move {
                    let details = match cache {
                        Some(details) => details.clone(),
                        None => {
                            let fetched = client.place_details(&id).await?;
                            *cache = Some(fetched.clone());
                            fetched
                        }
                    };

                    let place = PlaceRepository::new(&db)
                        .insert_or_fetch_external(&id, &details)
                        .await?;

                    Ok(place)
                })
            })
            .await;

        match result {
            Ok(place) => Ok(place),
            Err(Error::PlacesError(_)) => Err(FavoriteError::ExternalUnavailable {
                external_id: external_id.to_string(),
                attempts: ctx.max_attempts(),
            }
            .into()),
            Err(err) => Err(err),
        }
    }
}
