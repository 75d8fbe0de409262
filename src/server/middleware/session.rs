//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but only exposes the keys of one
//! concern:
//! - `AuthSession` - Logged in user id
//! - `CsrfSession` - Single-use OAuth2 state token
//! - `DiscordTokenSession` - The user's Discord OAuth2 access token
//! - `GuildCacheSession` - Manageable guilds fetched from Discord, with fetch time

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tower_sessions::Session;

use crate::{
    model::guild::GuildDto,
    server::{error::AppError, util::parse::parse_u64_from_string},
};

const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";
const SESSION_DISCORD_ACCESS_TOKEN: &str = "discord:access_token";
const SESSION_GUILD_CACHE: &str = "discord:guilds";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's Discord ID in the session.
    ///
    /// Called after successful authentication to establish a logged-in session.
    ///
    /// # Returns
    /// - `Ok(())` - User ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: u64) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_USER_ID, user_id.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the user's Discord ID from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in, returns their Discord ID
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    /// - `Err(AppError::InternalErr(_))` - Stored id is not a number
    pub async fn get_user_id(&self) -> Result<Option<u64>, AppError> {
        let Some(user_id_str) = self.session.get::<String>(SESSION_AUTH_USER_ID).await? else {
            return Ok(None);
        };

        let user_id = parse_u64_from_string(user_id_str)?;

        Ok(Some(user_id))
    }

    /// Issues a fresh session id, used on login to prevent session fixation.
    pub async fn cycle_id(&self) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        Ok(())
    }

    /// Clears all data from the session.
    ///
    /// Used during logout and when Discord rejects the stored token.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// CSRF protection session management.
///
/// The token stored at login is removed when read, so each callback can use it once.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - CSRF token was found and removed
    /// - `Ok(None)` - No CSRF token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}

/// Storage for the Discord OAuth2 access token of the logged in user.
///
/// The token is needed to list the user's guilds when the guild cache expires.
pub struct DiscordTokenSession<'a> {
    session: &'a Session,
}

impl<'a> DiscordTokenSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_access_token(&self, token: String) -> Result<(), AppError> {
        self.session
            .insert(SESSION_DISCORD_ACCESS_TOKEN, token)
            .await?;
        Ok(())
    }

    pub async fn get_access_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.get(SESSION_DISCORD_ACCESS_TOKEN).await?;
        Ok(token)
    }
}

/// Guilds the user may manage, as last fetched from Discord.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CachedGuilds {
    pub fetched_at: DateTime<Utc>,
    pub guilds: Vec<GuildDto>,
}

impl CachedGuilds {
    pub fn new(guilds: Vec<GuildDto>) -> Self {
        Self {
            fetched_at: Utc::now(),
            guilds,
        }
    }

    /// Whether the entry is still younger than `ttl` at `now`.
    pub fn is_fresh(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        match chrono::Duration::from_std(ttl) {
            Ok(ttl) => now.signed_duration_since(self.fetched_at) < ttl,
            Err(_) => true,
        }
    }

    pub fn contains(&self, guild_id: u64) -> bool {
        self.guilds.iter().any(|guild| guild.id == guild_id)
    }
}

pub struct GuildCacheSession<'a> {
    session: &'a Session,
}

impl<'a> GuildCacheSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn get(&self) -> Result<Option<CachedGuilds>, AppError> {
        let cached = self.session.get(SESSION_GUILD_CACHE).await?;
        Ok(cached)
    }

    pub async fn set(&self, cached: &CachedGuilds) -> Result<(), AppError> {
        self.session.insert(SESSION_GUILD_CACHE, cached).await?;
        Ok(())
    }

    /// Forces the next guild lookup to go to Discord.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session
            .remove::<CachedGuilds>(SESSION_GUILD_CACHE)
            .await?;
        Ok(())
    }
}
