use chrono::Utc;
use sea_orm::DatabaseConnection;

use entity::account;

use crate::data::account::AccountRepository;
use crate::data::favorite::FavoriteRepository;
use crate::data::place::{NewLocalPlace, PlaceRepository};
use crate::error::{admin::AdminError, Error};
use crate::model::account::{AccountDto, Role, StatsDto};
use crate::model::place::{NewPlaceDto, PlaceDto, SOURCE_LOCAL};

/// The seeded super administrator, recognized by name or email. It can act
/// on every account and no other administrator can act on it.
pub const SUPER_ADMIN_NAME: &str = "Administrator";
pub const SUPER_ADMIN_EMAIL: &str = "admin@savora.app";

pub fn is_super_admin(account: &account::Model) -> bool {
    account.name == SUPER_ADMIN_NAME || account.email == SUPER_ADMIN_EMAIL
}

/// Administrator actions on accounts and the local catalog.
///
/// Every mutation runs through [`ensure_can_modify`]: the super admin is
/// untouchable, and ordinary administrators cannot act on each other. The
/// caller's administrator role itself is checked at the request boundary.
pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

/// Rejects mutations on protected targets. The super admin may act on
/// anyone but itself being targeted is never allowed; a regular
/// administrator may only act on non-administrators and on itself.
fn ensure_can_modify(
    actor: &account::Model,
    target: &account::Model,
) -> Result<(), AdminError> {
    if is_super_admin(target) {
        return Err(AdminError::ProtectedAccount {
            actor: actor.id,
            target: target.id,
        });
    }

    let target_is_admin = target.role == Role::Admin.as_str();
    if target_is_admin && target.id != actor.id && !is_super_admin(actor) {
        return Err(AdminError::ProtectedAccount {
            actor: actor.id,
            target: target.id,
        });
    }

    Ok(())
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_accounts(&self) -> Result<Vec<AccountDto>, Error> {
        Ok(AccountRepository::new(self.db)
            .list()
            .await?
            .into_iter()
            .map(AccountDto::from)
            .collect())
    }

    pub async fn set_role(
        &self,
        actor: &account::Model,
        target_id: i32,
        role: &str,
    ) -> Result<AccountDto, Error> {
        let Some(role) = Role::parse(role) else {
            return Err(AdminError::InvalidRole(role.to_string()).into());
        };

        let accounts = AccountRepository::new(self.db);
        let Some(target) = accounts.find_by_id(target_id).await? else {
            return Err(AdminError::TargetNotFound(target_id).into());
        };

        ensure_can_modify(actor, &target)?;

        let Some(updated) = accounts.set_role(target_id, role).await? else {
            return Err(AdminError::TargetNotFound(target_id).into());
        };

        tracing::info!(
            actor_id = %actor.id,
            target_id = %target_id,
            role = %updated.role,
            "account role updated"
        );

        Ok(updated.into())
    }

    pub async fn set_banned(
        &self,
        actor: &account::Model,
        target_id: i32,
        banned: bool,
    ) -> Result<AccountDto, Error> {
        let accounts = AccountRepository::new(self.db);
        let Some(target) = accounts.find_by_id(target_id).await? else {
            return Err(AdminError::TargetNotFound(target_id).into());
        };

        ensure_can_modify(actor, &target)?;

        let Some(updated) = accounts.set_banned(target_id, banned).await? else {
            return Err(AdminError::TargetNotFound(target_id).into());
        };

        tracing::info!(
            actor_id = %actor.id,
            target_id = %target_id,
            banned = %banned,
            "account ban flag updated"
        );

        Ok(updated.into())
    }

    pub async fn set_can_review(
        &self,
        actor: &account::Model,
        target_id: i32,
        can_review: bool,
    ) -> Result<AccountDto, Error> {
        let accounts = AccountRepository::new(self.db);
        let Some(target) = accounts.find_by_id(target_id).await? else {
            return Err(AdminError::TargetNotFound(target_id).into());
        };

        ensure_can_modify(actor, &target)?;

        let Some(updated) = accounts.set_can_review(target_id, can_review).await? else {
            return Err(AdminError::TargetNotFound(target_id).into());
        };

        Ok(updated.into())
    }

    /// Deletes an account outright. Favorites and search history go with it
    /// through the schema's cascades.
    pub async fn delete_account(
        &self,
        actor: &account::Model,
        target_id: i32,
    ) -> Result<(), Error> {
        if actor.id == target_id {
            return Err(AdminError::SelfDeletion.into());
        }

        let accounts = AccountRepository::new(self.db);
        let Some(target) = accounts.find_by_id(target_id).await? else {
            return Err(AdminError::TargetNotFound(target_id).into());
        };

        ensure_can_modify(actor, &target)?;

        accounts.delete(target_id).await?;

        tracing::info!(actor_id = %actor.id, target_id = %target_id, "account deleted");

        Ok(())
    }

    pub async fn stats(&self) -> Result<StatsDto, Error> {
        let accounts = AccountRepository::new(self.db);
        let places = PlaceRepository::new(self.db);
        let favorites = FavoriteRepository::new(self.db);

        Ok(StatsDto {
            total_users: accounts.count_all().await?,
            admin_count: accounts.count_by_role(Role::Admin).await?,
            banned_users: accounts.count_banned().await?,
            total_places: places.count_all().await?,
            local_places: places.count_by_source(SOURCE_LOCAL).await?,
            total_favorites: favorites.count_all().await?,
        })
    }

    /// Adds an administrator-authored place to the catalog. The external id
    /// is generated from the current time and the author unless the form
    /// supplies one.
    pub async fn create_local_place(
        &self,
        actor: &account::Model,
        form: NewPlaceDto,
    ) -> Result<PlaceDto, Error> {
        let external_id = form
            .external_id
            .unwrap_or_else(|| format!("LOCAL_{}_{}", Utc::now().timestamp_millis(), actor.id));

        let places = PlaceRepository::new(self.db);
        if places.find_by_external_id(&external_id).await?.is_some() {
            return Err(AdminError::PlaceExists(external_id).into());
        }

        let place = places
            .create_local(NewLocalPlace {
                external_id,
                name: form.name,
                address: form.address,
                latitude: form.latitude,
                longitude: form.longitude,
                category: form.category,
                price_level: form.price_level,
                photo_ref: form.photo_ref,
                created_by: actor.id,
            })
            .await?;

        tracing::info!(
            actor_id = %actor.id,
            external_id = ?place.external_id,
            "local place created"
        );

        Ok(place.into())
    }
}
