//! Account fixture utilities.
//!
//! Inserts account records covering the security states the application
//! distinguishes: regular users, administrators, banned accounts, and
//! anonymous guests. All accounts are created with bcrypt hashes of
//! [`TEST_PASSWORD`](crate::constant::TEST_PASSWORD) and
//! [`TEST_PIN`](crate::constant::TEST_PIN) so login and unlock flows can be
//! driven with known credentials.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_BCRYPT_COST, TEST_PASSWORD, TEST_PIN},
    error::TestError,
    TestSetup,
};

impl TestSetup {
    pub fn accounts<'a>(&'a mut self) -> AccountFixtures<'a> {
        AccountFixtures { setup: self }
    }
}

pub struct AccountFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> AccountFixtures<'a> {
    /// Insert a regular account with the standard test credentials.
    pub async fn insert_account(
        &self,
        name: &str,
        email: &str,
    ) -> Result<entity::account::Model, TestError> {
        self.insert(name, email, "USER", false, true).await
    }

    /// Insert an administrator account with the standard test credentials.
    pub async fn insert_admin(
        &self,
        name: &str,
        email: &str,
    ) -> Result<entity::account::Model, TestError> {
        self.insert(name, email, "ADMIN", false, true).await
    }

    /// Insert a banned account with the standard test credentials.
    pub async fn insert_banned_account(
        &self,
        name: &str,
        email: &str,
    ) -> Result<entity::account::Model, TestError> {
        self.insert(name, email, "USER", true, true).await
    }

    /// Insert an anonymous guest account.
    ///
    /// Guests carry the `guest_` email prefix, no recovery PIN, and no
    /// review permission.
    pub async fn insert_guest(&self) -> Result<entity::account::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Account::insert(entity::account::ActiveModel {
            name: ActiveValue::Set("Guest-test".to_string()),
            email: ActiveValue::Set("guest_test@savora.local".to_string()),
            password_hash: ActiveValue::Set(bcrypt::hash(TEST_PASSWORD, TEST_BCRYPT_COST)?),
            recovery_pin_hash: ActiveValue::Set(None),
            role: ActiveValue::Set("GUEST".to_string()),
            banned: ActiveValue::Set(false),
            can_review: ActiveValue::Set(false),
            failed_login_attempts: ActiveValue::Set(0),
            temporary_lock: ActiveValue::Set(false),
            profile_image_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            last_login_at: ActiveValue::Set(Some(now)),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    async fn insert(
        &self,
        name: &str,
        email: &str,
        role: &str,
        banned: bool,
        can_review: bool,
    ) -> Result<entity::account::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Account::insert(entity::account::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            email: ActiveValue::Set(email.to_string()),
            password_hash: ActiveValue::Set(bcrypt::hash(TEST_PASSWORD, TEST_BCRYPT_COST)?),
            recovery_pin_hash: ActiveValue::Set(Some(bcrypt::hash(TEST_PIN, TEST_BCRYPT_COST)?)),
            role: ActiveValue::Set(role.to_string()),
            banned: ActiveValue::Set(banned),
            can_review: ActiveValue::Set(can_review),
            failed_login_attempts: ActiveValue::Set(0),
            temporary_lock: ActiveValue::Set(false),
            profile_image_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            last_login_at: ActiveValue::Set(Some(now)),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }
}
