use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, ExprTrait, IntoActiveModel, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use entity::account;
use entity::prelude::Account;

use crate::model::account::Role;

/// Fields required to persist a new account, hashed upstream.
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub recovery_pin_hash: Option<String>,
    pub role: Role,
    pub can_review: bool,
}

pub struct AccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, new_account: NewAccount) -> Result<account::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let account = account::ActiveModel {
            name: ActiveValue::Set(new_account.name),
            email: ActiveValue::Set(new_account.email),
            password_hash: ActiveValue::Set(new_account.password_hash),
            recovery_pin_hash: ActiveValue::Set(new_account.recovery_pin_hash),
            role: ActiveValue::Set(new_account.role.as_str().to_string()),
            banned: ActiveValue::Set(false),
            can_review: ActiveValue::Set(new_account.can_review),
            failed_login_attempts: ActiveValue::Set(0),
            temporary_lock: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            // Creation doubles as the first login, every creation path hands
            // back a session token right away.
            last_login_at: ActiveValue::Set(Some(now)),
            ..Default::default()
        };

        account.insert(self.db).await
    }

    pub async fn find_by_id(&self, account_id: i32) -> Result<Option<account::Model>, DbErr> {
        Account::find_by_id(account_id).one(self.db).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<account::Model>, DbErr> {
        Account::find()
            .filter(account::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<account::Model>, DbErr> {
        Account::find()
            .filter(account::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<account::Model>, DbErr> {
        Account::find()
            .order_by_asc(account::Column::Id)
            .all(self.db)
            .await
    }

    /// Increments the failed login counter and locks the account once the
    /// stored counter reaches `lock_threshold`. Both statements update in
    /// place so concurrent failures cannot lose increments, whichever request
    /// pushes the counter over the threshold ends up locking. Returns the
    /// account as persisted after the update.
    pub async fn record_failed_login(
        &self,
        account_id: i32,
        lock_threshold: i32,
    ) -> Result<Option<account::Model>, DbErr> {
        Account::update_many()
            .col_expr(
                account::Column::FailedLoginAttempts,
                Expr::col(account::Column::FailedLoginAttempts).add(1),
            )
            .filter(account::Column::Id.eq(account_id))
            .exec(self.db)
            .await?;

        Account::update_many()
            .col_expr(account::Column::TemporaryLock, Expr::value(true))
            .filter(account::Column::Id.eq(account_id))
            .filter(account::Column::FailedLoginAttempts.gte(lock_threshold))
            .exec(self.db)
            .await?;

        self.find_by_id(account_id).await
    }

    /// Clears the failure counter and lock and stamps the login time.
    pub async fn record_successful_login(
        &self,
        account_id: i32,
    ) -> Result<Option<account::Model>, DbErr> {
        let Some(account) = self.find_by_id(account_id).await? else {
            return Ok(None);
        };

        let mut account = account.into_active_model();
        account.failed_login_attempts = ActiveValue::Set(0);
        account.temporary_lock = ActiveValue::Set(false);
        account.last_login_at = ActiveValue::Set(Some(Utc::now().naive_utc()));

        Ok(Some(account.update(self.db).await?))
    }

    /// Resets the failure counter, the temporary lock and the ban flag in one
    /// go. Used by the recovery PIN flow, which restores a locked account to a
    /// usable state.
    pub async fn clear_security_state(
        &self,
        account_id: i32,
    ) -> Result<Option<account::Model>, DbErr> {
        let Some(account) = self.find_by_id(account_id).await? else {
            return Ok(None);
        };

        let mut account = account.into_active_model();
        account.failed_login_attempts = ActiveValue::Set(0);
        account.temporary_lock = ActiveValue::Set(false);
        account.banned = ActiveValue::Set(false);

        Ok(Some(account.update(self.db).await?))
    }

    pub async fn update_profile(
        &self,
        account_id: i32,
        name: Option<String>,
        email: Option<String>,
        profile_image_url: Option<String>,
        password_hash: Option<String>,
    ) -> Result<Option<account::Model>, DbErr> {
        let Some(account) = self.find_by_id(account_id).await? else {
            return Ok(None);
        };

        let mut account = account.into_active_model();
        if let Some(name) = name {
            account.name = ActiveValue::Set(name);
        }
        if let Some(email) = email {
            account.email = ActiveValue::Set(email);
        }
        if let Some(url) = profile_image_url {
            account.profile_image_url = ActiveValue::Set(Some(url));
        }
        if let Some(hash) = password_hash {
            account.password_hash = ActiveValue::Set(hash);
        }

        Ok(Some(account.update(self.db).await?))
    }

    pub async fn set_role(
        &self,
        account_id: i32,
        role: Role,
    ) -> Result<Option<account::Model>, DbErr> {
        let Some(account) = self.find_by_id(account_id).await? else {
            return Ok(None);
        };

        let mut account = account.into_active_model();
        account.role = ActiveValue::Set(role.as_str().to_string());

        Ok(Some(account.update(self.db).await?))
    }

    pub async fn set_banned(
        &self,
        account_id: i32,
        banned: bool,
    ) -> Result<Option<account::Model>, DbErr> {
        let Some(account) = self.find_by_id(account_id).await? else {
            return Ok(None);
        };

        let mut account = account.into_active_model();
        account.banned = ActiveValue::Set(banned);

        Ok(Some(account.update(self.db).await?))
    }

    pub async fn set_can_review(
        &self,
        account_id: i32,
        can_review: bool,
    ) -> Result<Option<account::Model>, DbErr> {
        let Some(account) = self.find_by_id(account_id).await? else {
            return Ok(None);
        };

        let mut account = account.into_active_model();
        account.can_review = ActiveValue::Set(can_review);

        Ok(Some(account.update(self.db).await?))
    }

    pub async fn delete(&self, account_id: i32) -> Result<DeleteResult, DbErr> {
        Account::delete_by_id(account_id).exec(self.db).await
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        Account::find().count(self.db).await
    }

    pub async fn count_by_role(&self, role: Role) -> Result<u64, DbErr> {
        Account::find()
            .filter(account::Column::Role.eq(role.as_str()))
            .count(self.db)
            .await
    }

    pub async fn count_banned(&self) -> Result<u64, DbErr> {
        Account::find()
            .filter(account::Column::Banned.eq(true))
            .count(self.db)
            .await
    }
}
