//! Environment based configuration.
//!
//! Values are read once at startup, after `dotenvy` has loaded `.env`.

use std::time::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";
const DEFAULT_DISCORD_API_URL: &str = "https://discord.com/api/v10";
const DEFAULT_UPSTREAM_API_URL: &str = "https://furraidapi.fluffici.eu";

/// KICK_MEMBERS, BAN_MEMBERS, MANAGE_CHANNELS, ADD_REACTIONS, VIEW_AUDIT_LOG, VIEW_CHANNEL,
/// SEND_MESSAGES, MANAGE_MESSAGES, EMBED_LINKS, READ_MESSAGE_HISTORY, MANAGE_ROLES and
/// MODERATE_MEMBERS.
const DEFAULT_BOT_INVITE_PERMISSIONS: u64 = 1_099_780_156_630;
const DEFAULT_GUILD_CACHE_TTL_SECS: u64 = 300;

pub struct Config {
    pub database_url: String,
    pub app_url: String,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,
    pub discord_api_url: String,

    pub upstream_api_url: String,
    pub upstream_api_token: String,

    pub bot_invite_permissions: u64,
    pub guild_cache_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            app_url: trim_url(required("APP_URL")?),
            discord_client_id: required("DISCORD_CLIENT_ID")?,
            discord_client_secret: required("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: required("DISCORD_REDIRECT_URL")?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            discord_api_url: trim_url(optional("DISCORD_API_URL", DEFAULT_DISCORD_API_URL)),
            upstream_api_url: trim_url(optional("UPSTREAM_API_URL", DEFAULT_UPSTREAM_API_URL)),
            upstream_api_token: required("UPSTREAM_API_TOKEN")?,
            bot_invite_permissions: parsed("BOT_INVITE_PERMISSIONS", DEFAULT_BOT_INVITE_PERMISSIONS)?,
            guild_cache_ttl: Duration::from_secs(parsed(
                "GUILD_CACHE_TTL_SECS",
                DEFAULT_GUILD_CACHE_TTL_SECS,
            )?),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parsed(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => {
            value
                .trim()
                .parse()
                .map_err(|e: std::num::ParseIntError| ConfigError::InvalidEnvVar {
                    name: name.to_string(),
                    reason: e.to_string(),
                })
        }
        _ => Ok(default),
    }
}

/// Base URLs are joined with `/path`, so a trailing slash would double up.
fn trim_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
