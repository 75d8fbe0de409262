use crate::{
    client::{
        api::helper::{get, parse_optional_response, parse_response, send_request},
        model::error::ApiError,
    },
    model::guild::{ChannelDto, GuildDto, GuildOverviewDto, RoleDto},
};

pub async fn get_guilds(refresh: bool) -> Result<Vec<GuildDto>, ApiError> {
    let url = if refresh {
        "/api/guilds?refresh=true"
    } else {
        "/api/guilds"
    };
    let request = get(url);
    let response = send_request(request).await?;
    parse_response(response).await
}

/// Returns `None` when the bot hasn't been added to the guild yet.
pub async fn get_guild_overview(guild_id: u64) -> Result<Option<GuildOverviewDto>, ApiError> {
    let url = format!("/api/guilds/{}", guild_id);
    let request = get(&url);
    let response = send_request(request).await?;
    parse_optional_response(response).await
}

pub async fn get_channels(guild_id: u64) -> Result<Vec<ChannelDto>, ApiError> {
    let url = format!("/api/guilds/{}/channels", guild_id);
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn get_roles(guild_id: u64) -> Result<Vec<RoleDto>, ApiError> {
    let url = format!("/api/guilds/{}/roles", guild_id);
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}
