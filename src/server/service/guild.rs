//! Which guilds the session user may manage.
//!
//! The list comes from Discord's `/users/@me/guilds` and is cached in the session for
//! the configured TTL so that every proxied request doesn't hit Discord.

use chrono::Utc;
use dioxus_logger::tracing;
use std::time::Duration;
use tower_sessions::Session;

use crate::{
    model::guild::GuildDto,
    server::{
        error::{auth::AuthError, AppError},
        middleware::session::{AuthSession, CachedGuilds, DiscordTokenSession, GuildCacheSession},
        service::discord::DiscordApiClient,
    },
};

pub struct GuildService<'a> {
    discord: DiscordApiClient<'a>,
    session: &'a Session,
    ttl: Duration,
}

impl<'a> GuildService<'a> {
    pub fn new(discord: DiscordApiClient<'a>, session: &'a Session, ttl: Duration) -> Self {
        Self {
            discord,
            session,
            ttl,
        }
    }

    /// Guilds the user owns or holds `ADMINISTRATOR`/`MANAGE_GUILD` in, sorted by name.
    ///
    /// Served from the session cache while it is fresh. Otherwise fetched from Discord
    /// with the stored access token.
    ///
    /// # Returns
    /// - `Ok(Vec<GuildDto>)` - Manageable guilds
    /// - `Err(AuthError::MissingDiscordToken)` - No token stored for the user
    /// - `Err(AuthError::DiscordTokenRejected)` - Token expired or revoked; the session
    ///   has been cleared
    /// - `Err(AppError::ReqwestErr)` - Discord unreachable
    pub async fn manageable_guilds(&self, user_id: u64) -> Result<Vec<GuildDto>, AppError> {
        let cache = GuildCacheSession::new(self.session);

        if let Some(cached) = cache.get().await? {
            if cached.is_fresh(self.ttl, Utc::now()) {
                return Ok(cached.guilds);
            }
        }

        let cached = self.refresh(user_id).await?;

        Ok(cached.guilds)
    }

    /// Whether `guild_id` is among the user's manageable guilds.
    pub async fn can_manage(&self, user_id: u64, guild_id: u64) -> Result<bool, AppError> {
        let guilds = self.manageable_guilds(user_id).await?;

        Ok(guilds.iter().any(|guild| guild.id == guild_id))
    }

    /// Drops the cached list so the next lookup goes to Discord.
    pub async fn invalidate(&self) -> Result<(), AppError> {
        GuildCacheSession::new(self.session).clear().await
    }

    async fn refresh(&self, user_id: u64) -> Result<CachedGuilds, AppError> {
        let Some(token) = DiscordTokenSession::new(self.session)
            .get_access_token()
            .await?
        else {
            return Err(AuthError::MissingDiscordToken(user_id).into());
        };

        let guilds = match self.discord.current_user_guilds(&token).await {
            Ok(guilds) => guilds,
            Err(AppError::AuthErr(AuthError::DiscordTokenRejected)) => {
                tracing::info!(
                    "Discord token of user {} is no longer valid, clearing session",
                    user_id
                );
                AuthSession::new(self.session).clear().await;
                return Err(AuthError::DiscordTokenRejected.into());
            }
            Err(e) => return Err(e),
        };

        let total = guilds.len();
        let mut manageable: Vec<GuildDto> = guilds
            .into_iter()
            .filter(|guild| guild.can_manage())
            .map(|guild| guild.into_dto())
            .collect();
        manageable.sort_by_key(|guild| guild.name.to_lowercase());

        tracing::debug!(
            "User {} can manage {} of {} guilds",
            user_id,
            manageable.len(),
            total
        );

        let cached = CachedGuilds::new(manageable);
        GuildCacheSession::new(self.session).set(&cached).await?;

        Ok(cached)
    }
}
