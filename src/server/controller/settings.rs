use axum::{
    body::Bytes,
    extract::{Path, State},
    http::Method,
    response::IntoResponse,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, settings::SettingsSection},
    server::{
        controller::try_forward_for_guild, error::AppError, service::upstream::UpstreamRequest,
        state::AppState,
    },
};

pub static SETTINGS_TAG: &str = "settings";

fn parse_section(section: &str) -> Result<SettingsSection, AppError> {
    section
        .parse::<SettingsSection>()
        .map_err(|e| AppError::NotFound(e.to_string()))
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/settings/{section}",
    tag = SETTINGS_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("section" = SettingsSection, Path, description = "Settings section")
    ),
    responses(
        (status = 200, description = "Current settings of the section"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User cannot manage this guild", body = ErrorDto),
        (status = 404, description = "Unknown settings section", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_settings(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, section)): Path<(u64, String)>,
) -> Result<impl IntoResponse, AppError> {
    try_forward_for_guild(&state, &session, guild_id, |actor| {
        let section = parse_section(&section)?;

        Ok(UpstreamRequest::get(format!("/guilds/{}/settings/{}", guild_id, section), actor))
    })
    .await
}

#[utoipa::path(
    patch,
    path = "/api/guilds/{guild_id}/settings/{section}",
    tag = SETTINGS_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("section" = SettingsSection, Path, description = "Settings section")
    ),
    request_body(content = String, description = "JSON object with the changed fields", content_type = "application/json"),
    responses(
        (status = 200, description = "Updated settings of the section"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User cannot manage this guild", body = ErrorDto),
        (status = 404, description = "Unknown settings section", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_settings(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, section)): Path<(u64, String)>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    try_forward_for_guild(&state, &session, guild_id, |actor| {
        let section = parse_section(&section)?;

        Ok(UpstreamRequest::new(
            Method::PATCH,
            format!("/guilds/{}/settings/{}", guild_id, section),
            actor,
        )
        .with_body(body))
    })
    .await
}
