use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, guild::GuildDto},
    server::{
        controller::forward_for_guild,
        error::AppError,
        middleware::auth::AuthGuard,
        service::{discord::DiscordApiClient, guild::GuildService, upstream::UpstreamRequest},
        state::AppState,
    },
};

pub static GUILD_TAG: &str = "guild";

#[derive(Deserialize, Default)]
pub struct GuildListParams {
    /// Skip the session cache and ask Discord again.
    #[serde(default)]
    pub refresh: bool,
}

#[utoipa::path(
    get,
    path = "/api/guilds",
    tag = GUILD_TAG,
    params(
        ("refresh" = Option<bool>, Query, description = "Bypass the cached guild list")
    ),
    responses(
        (status = 200, description = "Guilds the user owns or has Administrator/Manage Server in", body = Vec<GuildDto>),
        (status = 401, description = "User not authenticated or Discord token expired", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guilds(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<GuildListParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &session).require(&[]).await?;

    let guild_service = GuildService::new(
        DiscordApiClient::new(&state.http_client, &state.discord_api_url),
        &session,
        state.guild_cache_ttl,
    );

    if params.refresh {
        guild_service.invalidate().await?;
    }

    let guilds = guild_service.manageable_guilds(user.discord_id).await?;

    Ok((StatusCode::OK, Json(guilds)))
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Guild overview from the external API"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User cannot manage this guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guild(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    forward_for_guild(&state, &session, guild_id, |actor| {
        UpstreamRequest::get(format!("/guilds/{}", guild_id), actor)
    })
    .await
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/channels",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Channels of the guild"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User cannot manage this guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_channels(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    forward_for_guild(&state, &session, guild_id, |actor| {
        UpstreamRequest::get(format!("/guilds/{}/channels", guild_id), actor)
    })
    .await
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/roles",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Roles of the guild"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User cannot manage this guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_roles(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    forward_for_guild(&state, &session, guild_id, |actor| {
        UpstreamRequest::get(format!("/guilds/{}/roles", guild_id), actor)
    })
    .await
}
