use chrono::Utc;
use rand::{distr::Alphanumeric, Rng};
use sea_orm::{DatabaseConnection, SqlErr};

use entity::account;

use crate::data::account::{AccountRepository, NewAccount};
use crate::error::{auth::AuthError, Error};
use crate::model::account::Role;
use crate::model::auth::{AuthResponseDto, LoginDto, RegisterDto, UnlockDto};
use crate::util::jwt::TokenIssuer;
use crate::util::password;

/// Wrong-password attempts tolerated before the temporary lock engages.
pub const MAX_FAILED_LOGINS: i32 = 3;
/// Accepted recovery PIN length range, inclusive.
pub const PIN_MIN_LEN: usize = 4;
pub const PIN_MAX_LEN: usize = 8;
/// Email prefix marking throwaway guest accounts.
pub const GUEST_EMAIL_PREFIX: &str = "guest_";

const GUEST_SUFFIX_LEN: usize = 8;
const GUEST_PASSWORD_LEN: usize = 24;
const GUEST_EMAIL_DOMAIN: &str = "savora.local";

/// Account lifecycle and login security.
///
/// Owns registration, the password login state machine with its lockout
/// counter, PIN-based recovery and guest sessions. All counter updates go
/// through the repository's atomic statements so concurrent requests cannot
/// lose increments.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenIssuer,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenIssuer) -> Self {
        Self { db, tokens }
    }

    /// Registers a durable account and opens its first session.
    ///
    /// The recovery PIN is mandatory and length-checked here since this is
    /// the only moment it can be set.
    pub async fn register(&self, form: RegisterDto) -> Result<AuthResponseDto, Error> {
        if form.pin.len() < PIN_MIN_LEN || form.pin.len() > PIN_MAX_LEN {
            return Err(AuthError::PinLength {
                min: PIN_MIN_LEN,
                max: PIN_MAX_LEN,
            }
            .into());
        }

        let accounts = AccountRepository::new(self.db);

        if accounts.find_by_email(&form.email).await?.is_some() {
            return Err(AuthError::EmailTaken(form.email).into());
        }
        if accounts.find_by_name(&form.name).await?.is_some() {
            return Err(AuthError::NameTaken(form.name).into());
        }

        let password_hash = password::hash(&form.password).await?;
        let pin_hash = password::hash(&form.pin).await?;

        let name = form.name;
        let email = form.email;
        let created = accounts
            .create(NewAccount {
                name: name.clone(),
                email: email.clone(),
                password_hash,
                recovery_pin_hash: Some(pin_hash),
                role: Role::User,
                can_review: true,
            })
            .await;

        let account = match created {
            Ok(account) => account,
            // A concurrent registration can slip past the pre-checks; the
            // unique constraints are the source of truth.
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                if accounts.find_by_email(&email).await?.is_some() {
                    return Err(AuthError::EmailTaken(email).into());
                }
                return Err(AuthError::NameTaken(name).into());
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!(account_id = %account.id, "registered new account");

        self.session_for(account)
    }

    /// Runs the password login state machine.
    ///
    /// The checks happen in a fixed order: unknown email, ban, temporary
    /// lock, then password. A locked account is rejected even when the
    /// password is correct. A wrong password increments the persistent
    /// failure counter and the response reports either the remaining
    /// attempts or, once the counter reaches the threshold, the lock.
    pub async fn login(&self, form: LoginDto) -> Result<AuthResponseDto, Error> {
        let accounts = AccountRepository::new(self.db);

        let Some(account) = accounts.find_by_email(&form.email).await? else {
            return Err(AuthError::InvalidCredentials {
                email: form.email,
                attempts_left: None,
            }
            .into());
        };

        if account.banned {
            return Err(AuthError::Banned(account.email).into());
        }
        if account.temporary_lock {
            return Err(AuthError::Locked(account.email).into());
        }

        if !password::verify(&form.password, &account.password_hash).await? {
            // Persist the counter before answering so it survives no matter
            // what the client does next.
            let Some(updated) = accounts
                .record_failed_login(account.id, MAX_FAILED_LOGINS)
                .await?
            else {
                return Err(AuthError::InvalidCredentials {
                    email: account.email,
                    attempts_left: None,
                }
                .into());
            };

            if updated.temporary_lock {
                return Err(AuthError::Locked(updated.email).into());
            }

            let attempts_left = (MAX_FAILED_LOGINS - updated.failed_login_attempts).max(0);
            return Err(AuthError::InvalidCredentials {
                email: updated.email,
                attempts_left: Some(attempts_left),
            }
            .into());
        }

        let Some(account) = accounts.record_successful_login(account.id).await? else {
            return Err(AuthError::AccountNotFound(form.email).into());
        };

        tracing::debug!(account_id = %account.id, "login succeeded");

        self.session_for(account)
    }

    /// Recovers a locked account with the PIN chosen at registration.
    ///
    /// Works without a session on purpose: the caller is locked out. A
    /// matching PIN clears the failure counter, the lock and the ban flag in
    /// one step; a wrong PIN changes nothing.
    pub async fn unlock_with_pin(&self, form: UnlockDto) -> Result<AuthResponseDto, Error> {
        let accounts = AccountRepository::new(self.db);

        let Some(account) = accounts.find_by_email(&form.email).await? else {
            return Err(AuthError::AccountNotFound(form.email).into());
        };

        let Some(pin_hash) = account.recovery_pin_hash.as_deref() else {
            return Err(AuthError::InvalidPin(account.email).into());
        };

        if !password::verify(&form.pin, pin_hash).await? {
            return Err(AuthError::InvalidPin(account.email).into());
        }

        let Some(account) = accounts.clear_security_state(account.id).await? else {
            return Err(AuthError::AccountNotFound(form.email).into());
        };

        tracing::info!(account_id = %account.id, "account unlocked with recovery PIN");

        self.session_for(account)
    }

    /// Opens a throwaway guest session.
    ///
    /// The account is real so favorites and history work, but it carries a
    /// marker email, a random password nobody knows and no recovery PIN.
    /// Logging out deletes it.
    pub async fn guest_session(&self) -> Result<AuthResponseDto, Error> {
        let suffix: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(GUEST_SUFFIX_LEN)
            .map(char::from)
            .collect::<String>()
            .to_lowercase();
        let password: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(GUEST_PASSWORD_LEN)
            .map(char::from)
            .collect();

        let name = format!("Guest-{suffix}");
        let email = format!(
            "{GUEST_EMAIL_PREFIX}{}_{suffix}@{GUEST_EMAIL_DOMAIN}",
            Utc::now().timestamp_millis()
        );
        let password_hash = password::hash(&password).await?;

        let account = AccountRepository::new(self.db)
            .create(NewAccount {
                name,
                email,
                password_hash,
                recovery_pin_hash: None,
                role: Role::Guest,
                can_review: false,
            })
            .await?;

        tracing::debug!(account_id = %account.id, "guest session opened");

        self.session_for(account)
    }

    /// Ends a session. Guest accounts are deleted outright; durable accounts
    /// only drop their token client-side.
    pub async fn logout(&self, account: &account::Model) -> Result<(), Error> {
        if account.role == Role::Guest.as_str() && account.email.starts_with(GUEST_EMAIL_PREFIX) {
            AccountRepository::new(self.db).delete(account.id).await?;
            tracing::debug!(account_id = %account.id, "guest account deleted on logout");
        }

        Ok(())
    }

    fn session_for(&self, account: account::Model) -> Result<AuthResponseDto, Error> {
        let token = self.tokens.issue(&account.email)?;

        Ok(AuthResponseDto {
            token,
            user: account.into(),
        })
    }
}
