use serde_json::{Map, Value};

use crate::{
    client::{
        api::helper::{get, parse_empty_response, parse_response, patch, send_request, serialize_json},
        model::error::ApiError,
    },
    model::settings::SettingsSection,
};

pub async fn get_settings(
    guild_id: u64,
    section: SettingsSection,
) -> Result<Map<String, Value>, ApiError> {
    let url = format!("/api/guilds/{}/settings/{}", guild_id, section);
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

/// Sends a partial update containing only the changed keys.
pub async fn update_settings(
    guild_id: u64,
    section: SettingsSection,
    changes: &Map<String, Value>,
) -> Result<(), ApiError> {
    let url = format!("/api/guilds/{}/settings/{}", guild_id, section);
    let body = serialize_json(changes)?;
    let request = patch(&url).body(body);
    let response = send_request(request).await?;
    parse_empty_response(response).await
}
