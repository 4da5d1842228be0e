use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role assigned to an account.
///
/// Stored as a plain string column; this enum is the single place that
/// validates and spells the accepted values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
    Guest,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::User => "USER",
            Self::Guest => "GUEST",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ADMIN" => Some(Self::Admin),
            "USER" => Some(Self::User),
            "GUEST" => Some(Self::Guest),
            _ => None,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct AccountDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub banned: bool,
    pub can_review: bool,
    pub profile_image_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub last_login_at: Option<NaiveDateTime>,
}

impl From<entity::account::Model> for AccountDto {
    fn from(model: entity::account::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            role: model.role,
            banned: model.banned,
            can_review: model.can_review,
            profile_image_url: model.profile_image_url,
            created_at: model.created_at,
            last_login_at: model.last_login_at,
        }
    }
}

/// Body for `PUT /api/users/me`; all fields optional, absent fields are
/// left unchanged. A password change requires the current password.
#[derive(Deserialize, ToSchema)]
pub struct UpdateProfileDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub profile_image_url: Option<String>,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdatedProfileDto {
    pub user: AccountDto,
    /// Set when the update changed the login email; the client should
    /// obtain a fresh token.
    pub email_changed: bool,
}

#[derive(Deserialize, ToSchema)]
pub struct RoleUpdateDto {
    pub role: String,
}

#[derive(Deserialize, ToSchema)]
pub struct BanUpdateDto {
    pub banned: bool,
}

#[derive(Deserialize, ToSchema)]
pub struct ReviewPermissionUpdateDto {
    pub can_review: bool,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StatsDto {
    pub total_users: u64,
    pub admin_count: u64,
    pub banned_users: u64,
    pub total_places: u64,
    pub local_places: u64,
    pub total_favorites: u64,
}
