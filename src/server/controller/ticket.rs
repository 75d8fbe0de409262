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
        pagination::ListQuery,
        ticket::{CloseTicketDto, NewTicketMessageDto},
    },
    server::{
        controller::{forward_for_guild, try_forward_for_guild},
        error::AppError,
        service::upstream::UpstreamRequest,
        state::AppState,
        util::parse::validate_path_id,
    },
};

pub static TICKET_TAG: &str = "ticket";

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/tickets",
    tag = TICKET_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ListQuery
    ),
    responses(
        (status = 200, description = "Page of tickets, optionally filtered by `status`"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User cannot manage this guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tickets(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    forward_for_guild(&state, &session, guild_id, |actor| {
        UpstreamRequest::get(format!("/guilds/{}/tickets", guild_id), actor).with_query(query)
    })
    .await
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/tickets/{ticket_id}",
    tag = TICKET_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("ticket_id" = String, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "The ticket"),
        (status = 400, description = "Malformed ticket id", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User cannot manage this guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ticket(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, ticket_id)): Path<(u64, String)>,
) -> Result<impl IntoResponse, AppError> {
    try_forward_for_guild(&state, &session, guild_id, |actor| {
        let ticket_id = validate_path_id(&ticket_id)?;

        Ok(UpstreamRequest::get(format!("/guilds/{}/tickets/{}", guild_id, ticket_id), actor))
    })
    .await
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/tickets/{ticket_id}/messages",
    tag = TICKET_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("ticket_id" = String, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Messages of the ticket, oldest first"),
        (status = 400, description = "Malformed ticket id", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User cannot manage this guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ticket_messages(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, ticket_id)): Path<(u64, String)>,
) -> Result<impl IntoResponse, AppError> {
    try_forward_for_guild(&state, &session, guild_id, |actor| {
        let ticket_id = validate_path_id(&ticket_id)?;

        Ok(UpstreamRequest::get(
            format!("/guilds/{}/tickets/{}/messages", guild_id, ticket_id),
            actor,
        ))
    })
    .await
}

#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/tickets/{ticket_id}/messages",
    tag = TICKET_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("ticket_id" = String, Path, description = "Ticket ID")
    ),
    request_body = NewTicketMessageDto,
    responses(
        (status = 201, description = "Message posted as staff"),
        (status = 400, description = "Malformed ticket id", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User cannot manage this guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn post_ticket_message(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, ticket_id)): Path<(u64, String)>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    try_forward_for_guild(&state, &session, guild_id, |actor| {
        let ticket_id = validate_path_id(&ticket_id)?;

        Ok(UpstreamRequest::new(
            Method::POST,
            format!("/guilds/{}/tickets/{}/messages", guild_id, ticket_id),
            actor,
        )
        .with_body(body))
    })
    .await
}

#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/tickets/{ticket_id}/close",
    tag = TICKET_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("ticket_id" = String, Path, description = "Ticket ID")
    ),
    request_body = CloseTicketDto,
    responses(
        (status = 200, description = "Ticket closed"),
        (status = 400, description = "Malformed ticket id", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User cannot manage this guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn close_ticket(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, ticket_id)): Path<(u64, String)>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    try_forward_for_guild(&state, &session, guild_id, |actor| {
        let ticket_id = validate_path_id(&ticket_id)?;

        Ok(UpstreamRequest::new(
            Method::POST,
            format!("/guilds/{}/tickets/{}/close", guild_id, ticket_id),
            actor,
        )
        .with_body(body))
    })
    .await
}
