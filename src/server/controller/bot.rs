use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use url::Url;

use crate::{
    model::api::ErrorDto,
    server::{error::AppError, state::AppState},
};

pub static BOT_TAG: &str = "bot";

const DISCORD_INVITE_URL: &str = "https://discord.com/oauth2/authorize";

#[derive(Deserialize)]
pub struct InviteParams {
    pub guild_id: Option<u64>,
}

/// Builds the bot invite link, preselecting `guild_id` when given.
pub fn invite_url(client_id: &str, permissions: u64, guild_id: Option<u64>) -> Result<Url, AppError> {
    let mut url = Url::parse(DISCORD_INVITE_URL)
        .map_err(|e| AppError::BadRequest(format!("Invalid invite URL: {}", e)))?;

    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("client_id", client_id)
            .append_pair("permissions", &permissions.to_string())
            .append_pair("scope", "bot applications.commands");

        if let Some(guild_id) = guild_id {
            query
                .append_pair("guild_id", &guild_id.to_string())
                .append_pair("disable_guild_select", "true");
        }
    }

    Ok(url)
}

#[utoipa::path(
    get,
    path = "/api/bot/invite",
    tag = BOT_TAG,
    params(
        ("guild_id" = Option<u64>, Query, description = "Guild to preselect on Discord's invite screen")
    ),
    responses(
        (status = 303, description = "Redirect to Discord's bot invite screen"),
        (status = 400, description = "Invalid guild id", body = ErrorDto)
    ),
)]
pub async fn invite(
    State(state): State<AppState>,
    Query(params): Query<InviteParams>,
) -> Result<impl IntoResponse, AppError> {
    let url = invite_url(
        &state.discord_client_id,
        state.bot_invite_permissions,
        params.guild_id,
    )?;

    Ok(Redirect::to(url.as_str()))
}
