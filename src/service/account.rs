use sea_orm::{DatabaseConnection, SqlErr};

use entity::account;

use crate::data::account::AccountRepository;
use crate::error::{auth::AuthError, Error};
use crate::model::account::{UpdateProfileDto, UpdatedProfileDto};
use crate::util::password;

/// Self-service profile updates for the authenticated account.
pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies the provided profile fields and reports whether the login
    /// email changed, so the client knows its token subject is stale.
    ///
    /// A password change must prove knowledge of the current password. Name
    /// and email changes run through the same uniqueness rules as
    /// registration.
    pub async fn update_profile(
        &self,
        account: &account::Model,
        form: UpdateProfileDto,
    ) -> Result<UpdatedProfileDto, Error> {
        let accounts = AccountRepository::new(self.db);

        let password_hash = match form.new_password {
            Some(new_password) => {
                let Some(current) = form.current_password else {
                    return Err(AuthError::CurrentPasswordMismatch.into());
                };
                if !password::verify(&current, &account.password_hash).await? {
                    return Err(AuthError::CurrentPasswordMismatch.into());
                }
                Some(password::hash(&new_password).await?)
            }
            None => None,
        };

        let name = match form.name {
            Some(name) if name != account.name => {
                if accounts.find_by_name(&name).await?.is_some() {
                    return Err(AuthError::NameTaken(name).into());
                }
                Some(name)
            }
            _ => None,
        };

        let email_changed;
        let email = match form.email {
            Some(email) if email != account.email => {
                if accounts.find_by_email(&email).await?.is_some() {
                    return Err(AuthError::EmailTaken(email).into());
                }
                email_changed = true;
                Some(email)
            }
            _ => {
                email_changed = false;
                None
            }
        };

        let updated = accounts
            .update_profile(
                account.id,
                name.clone(),
                email.clone(),
                form.profile_image_url,
                password_hash,
            )
            .await;

        let updated = match updated {
            Ok(Some(updated)) => updated,
            Ok(None) => return Err(AuthError::AccountNotFound(account.email.clone()).into()),
            // Concurrent profile updates can collide on the unique columns.
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                if let Some(email) = email {
                    return Err(AuthError::EmailTaken(email).into());
                }
                return Err(AuthError::NameTaken(name.unwrap_or_default()).into());
            }
            Err(err) => return Err(err.into()),
        };

        tracing::debug!(account_id = %updated.id, email_changed = %email_changed, "profile updated");

        Ok(UpdatedProfileDto {
            user: updated.into(),
            email_changed,
        })
    }
}
