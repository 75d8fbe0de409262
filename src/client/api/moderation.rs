use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, post, send_request, serialize_json,
        },
        model::error::ApiError,
    },
    model::{
        moderation::{ListEntryDto, ListKind, MemberDto, NewListEntryDto, SanctionDto},
        pagination::{ListQuery, Paginated},
    },
};

pub async fn get_members(
    guild_id: u64,
    query: &ListQuery,
) -> Result<Paginated<MemberDto>, ApiError> {
    let url = format!(
        "/api/guilds/{}/members?{}",
        guild_id,
        query.to_query_string()
    );
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn get_sanctions(
    guild_id: u64,
    query: &ListQuery,
) -> Result<Paginated<SanctionDto>, ApiError> {
    let url = format!(
        "/api/guilds/{}/sanctions?{}",
        guild_id,
        query.to_query_string()
    );
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn revoke_sanction(guild_id: u64, sanction_id: &str) -> Result<(), ApiError> {
    let url = format!("/api/guilds/{}/sanctions/{}", guild_id, sanction_id);
    let request = delete(&url);
    let response = send_request(request).await?;
    parse_empty_response(response).await
}

pub async fn get_list_entries(
    guild_id: u64,
    list: ListKind,
    query: &ListQuery,
) -> Result<Paginated<ListEntryDto>, ApiError> {
    let url = format!(
        "/api/guilds/{}/{}?{}",
        guild_id,
        list,
        query.to_query_string()
    );
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn add_list_entry(
    guild_id: u64,
    list: ListKind,
    entry: &NewListEntryDto,
) -> Result<(), ApiError> {
    let url = format!("/api/guilds/{}/{}", guild_id, list);
    let body = serialize_json(entry)?;
    let request = post(&url).body(body);
    let response = send_request(request).await?;
    parse_empty_response(response).await
}

pub async fn remove_list_entry(
    guild_id: u64,
    list: ListKind,
    user_id: &str,
) -> Result<(), ApiError> {
    let url = format!("/api/guilds/{}/{}/{}", guild_id, list, user_id);
    let request = delete(&url);
    let response = send_request(request).await?;
    parse_empty_response(response).await
}
