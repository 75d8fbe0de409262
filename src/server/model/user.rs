//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::UserDto,
    server::{error::AppError, util::parse::parse_u64_from_string},
};

/// A user who has logged into the dashboard at least once.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub discord_id: u64,
    /// Unique Discord username.
    pub name: String,
    /// Display name, if the user set one.
    pub global_name: Option<String>,
    /// Avatar hash.
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_login_at: DateTime<Utc>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            discord_id: self.discord_id,
            name: self.name,
            global_name: self.global_name,
            avatar: self.avatar,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored Discord ID is not a u64
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let discord_id = parse_u64_from_string(entity.discord_id)?;

        Ok(Self {
            discord_id,
            name: entity.name,
            global_name: entity.global_name,
            avatar: entity.avatar,
            created_at: entity.created_at,
            last_login_at: entity.last_login_at,
        })
    }
}

/// Profile fields refreshed from Discord on every login.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub discord_id: u64,
    pub name: String,
    pub global_name: Option<String>,
    pub avatar: Option<String>,
}
