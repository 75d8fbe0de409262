//! Builders for handler and service tests.

use std::time::Duration;

use oauth2::{AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::guild::GuildDto,
    server::{
        error::AppError,
        middleware::session::{AuthSession, CachedGuilds, DiscordTokenSession, GuildCacheSession},
        service::upstream::UpstreamClient,
        startup::setup_reqwest_client,
        state::{AppState, OAuth2Client},
    },
};

pub const TEST_UPSTREAM_TOKEN: &str = "test-upstream-token";

/// Nothing listens on port 9 of localhost, so requests fail fast.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

fn oauth_client(discord_api_url: &str) -> OAuth2Client {
    oauth2::basic::BasicClient::new(ClientId::new("1234".to_string()))
        .set_client_secret(ClientSecret::new("secret".to_string()))
        .set_auth_uri(AuthUrl::new("https://discord.com/oauth2/authorize".to_string()).unwrap())
        .set_token_uri(TokenUrl::new(format!("{}/oauth2/token", discord_api_url)).unwrap())
        .set_redirect_uri(
            RedirectUrl::new("http://localhost:8080/api/auth/callback".to_string()).unwrap(),
        )
}

/// State pointing Discord and the external API at the given base URLs.
pub fn app_state(db: &DatabaseConnection, discord_api_url: &str, upstream_url: &str) -> AppState {
    let http_client = setup_reqwest_client().unwrap();

    AppState {
        db: db.clone(),
        upstream: UpstreamClient::new(
            http_client.clone(),
            upstream_url.to_string(),
            TEST_UPSTREAM_TOKEN.to_string(),
        ),
        oauth_client: oauth_client(discord_api_url),
        http_client,
        discord_api_url: discord_api_url.to_string(),
        discord_client_id: "1234".to_string(),
        bot_invite_permissions: 8,
        guild_cache_ttl: Duration::from_secs(300),
        app_url: "http://localhost:8080".to_string(),
    }
}

/// Logs `user_id` into the session with a Discord token.
pub async fn log_in(session: &Session, user_id: u64) -> Result<(), AppError> {
    AuthSession::new(session).set_user_id(user_id).await?;
    DiscordTokenSession::new(session)
        .set_access_token("discord-token".to_string())
        .await?;
    Ok(())
}

/// Seeds a fresh guild cache so no Discord call is needed.
pub async fn cache_guilds(session: &Session, guild_ids: &[u64]) -> Result<(), AppError> {
    let guilds = guild_ids
        .iter()
        .map(|id| GuildDto {
            id: *id,
            name: format!("Guild {}", id),
            icon: None,
            owner: false,
        })
        .collect();

    GuildCacheSession::new(session)
        .set(&CachedGuilds::new(guilds))
        .await
}
