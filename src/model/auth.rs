use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::account::AccountDto;

#[derive(Deserialize, ToSchema)]
pub struct RegisterDto {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Recovery PIN used to unlock the account after repeated login failures
    pub pin: String,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct UnlockDto {
    pub email: String,
    pub pin: String,
}

/// Returned by every flow that establishes a session
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AuthResponseDto {
    pub token: String,
    pub user: AccountDto,
}

/// 401 body for a failed password attempt on an unlocked account
#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginFailureDto {
    pub error: String,
    /// Remaining attempts before the account is temporarily locked
    pub attempts_left: i32,
}

/// 403 body when the lockout (or a login during one) triggers
#[derive(Serialize, Deserialize, ToSchema)]
pub struct LockedDto {
    pub error: String,
    pub locked: bool,
}
