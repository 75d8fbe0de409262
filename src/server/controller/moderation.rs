use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::Method,
    response::IntoResponse,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        moderation::{ListKind, NewListEntryDto},
        pagination::ListQuery,
    },
    server::{
        controller::{forward_for_guild, try_forward_for_guild},
        error::AppError,
        service::upstream::UpstreamRequest,
        state::AppState,
        util::parse::validate_path_id,
    },
};

pub static MODERATION_TAG: &str = "moderation";

fn parse_list(list: &str) -> Result<ListKind, AppError> {
    list.parse::<ListKind>().map_err(AppError::NotFound)
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/members",
    tag = MODERATION_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ListQuery
    ),
    responses(
        (status = 200, description = "Page of guild members"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User cannot manage this guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_members(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    forward_for_guild(&state, &session, guild_id, |actor| {
        UpstreamRequest::get(format!("/guilds/{}/members", guild_id), actor).with_query(query)
    })
    .await
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/sanctions",
    tag = MODERATION_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ListQuery
    ),
    responses(
        (status = 200, description = "Page of sanctions, optionally filtered by `kind`"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User cannot manage this guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sanctions(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    forward_for_guild(&state, &session, guild_id, |actor| {
        UpstreamRequest::get(format!("/guilds/{}/sanctions", guild_id), actor).with_query(query)
    })
    .await
}

#[utoipa::path(
    delete,
    path = "/api/guilds/{guild_id}/sanctions/{sanction_id}",
    tag = MODERATION_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("sanction_id" = String, Path, description = "Sanction ID")
    ),
    responses(
        (status = 204, description = "Sanction revoked"),
        (status = 400, description = "Malformed sanction id", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User cannot manage this guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn revoke_sanction(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, sanction_id)): Path<(u64, String)>,
) -> Result<impl IntoResponse, AppError> {
    try_forward_for_guild(&state, &session, guild_id, |actor| {
        let sanction_id = validate_path_id(&sanction_id)?;

        Ok(UpstreamRequest::new(
            Method::DELETE,
            format!("/guilds/{}/sanctions/{}", guild_id, sanction_id),
            actor,
        ))
    })
    .await
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/{list}",
    tag = MODERATION_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("list" = ListKind, Path, description = "`blacklist` or `whitelist`"),
        ListQuery
    ),
    responses(
        (status = 200, description = "Page of list entries"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User cannot manage this guild", body = ErrorDto),
        (status = 404, description = "Unknown list", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_list_entries(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, list)): Path<(u64, String)>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    try_forward_for_guild(&state, &session, guild_id, |actor| {
        let list = parse_list(&list)?;

        Ok(
            UpstreamRequest::get(format!("/guilds/{}/{}", guild_id, list), actor)
                .with_query(query),
        )
    })
    .await
}

#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/{list}",
    tag = MODERATION_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("list" = ListKind, Path, description = "`blacklist` or `whitelist`")
    ),
    request_body = NewListEntryDto,
    responses(
        (status = 201, description = "Entry added"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User cannot manage this guild", body = ErrorDto),
        (status = 404, description = "Unknown list", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_list_entry(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, list)): Path<(u64, String)>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    try_forward_for_guild(&state, &session, guild_id, |actor| {
        let list = parse_list(&list)?;

        Ok(UpstreamRequest::new(Method::POST, format!("/guilds/{}/{}", guild_id, list), actor)
            .with_body(body))
    })
    .await
}

#[utoipa::path(
    delete,
    path = "/api/guilds/{guild_id}/{list}/{user_id}",
    tag = MODERATION_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("list" = ListKind, Path, description = "`blacklist` or `whitelist`"),
        ("user_id" = u64, Path, description = "Discord user ID")
    ),
    responses(
        (status = 204, description = "Entry removed"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User cannot manage this guild", body = ErrorDto),
        (status = 404, description = "Unknown list", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_list_entry(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, list, user_id)): Path<(u64, String, u64)>,
) -> Result<impl IntoResponse, AppError> {
    try_forward_for_guild(&state, &session, guild_id, |actor| {
        let list = parse_list(&list)?;

        Ok(UpstreamRequest::new(
            Method::DELETE,
            format!("/guilds/{}/{}/{}", guild_id, list, user_id),
            actor,
        ))
    })
    .await
}
