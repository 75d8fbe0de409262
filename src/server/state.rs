//! Application state shared across all request handlers.
//!
//! Built once during startup and cloned into every handler through Axum's state
//! extraction. Every field is cheap to clone: the database handle and HTTP clients
//! share their pools internally.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::time::Duration;

use crate::server::service::upstream::UpstreamClient;

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    /// SQLite pool holding users (and, through the session store, sessions).
    pub db: DatabaseConnection,

    /// Shared HTTP client without redirect following.
    ///
    /// Used for Discord API calls and for the OAuth2 code exchange.
    pub http_client: reqwest::Client,

    pub oauth_client: OAuth2Client,

    /// Client for the external moderation API every `/api/guilds/*` route proxies to.
    pub upstream: UpstreamClient,

    /// Discord REST base URL, e.g. `https://discord.com/api/v10`.
    pub discord_api_url: String,

    /// OAuth2 application id, reused as the bot's client id in invite links.
    pub discord_client_id: String,

    /// Permission bits requested when inviting the bot.
    pub bot_invite_permissions: u64,

    /// How long the manageable-guild list stays cached in a session.
    pub guild_cache_ttl: Duration,

    /// Public base URL of the dashboard, used for CORS.
    pub app_url: String,
}
