//! Payloads returned by the Discord REST API for an OAuth2 user token.

use serde::Deserialize;
use serenity::all::{GuildId, UserId};

use crate::{
    model::guild::GuildDto,
    server::{
        model::user::UpsertUserParam,
        util::permission::{can_manage_guild, parse_permissions},
    },
};

/// `GET /users/@me`
#[derive(Debug, Clone, Deserialize)]
pub struct DiscordUserInfo {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub global_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl DiscordUserInfo {
    pub fn into_upsert_param(self) -> UpsertUserParam {
        UpsertUserParam {
            discord_id: self.id.get(),
            name: self.username,
            global_name: self.global_name,
            avatar: self.avatar,
        }
    }
}

/// One entry of `GET /users/@me/guilds`.
///
/// `permissions` is the user's computed guild-level permission set as a decimal string.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentUserGuild {
    pub id: GuildId,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub owner: bool,
    #[serde(default)]
    pub permissions: String,
}

impl CurrentUserGuild {
    pub fn can_manage(&self) -> bool {
        can_manage_guild(self.owner, parse_permissions(&self.permissions))
    }

    pub fn into_dto(self) -> GuildDto {
        GuildDto {
            id: self.id.get(),
            name: self.name,
            icon: self.icon,
            owner: self.owner,
        }
    }
}
