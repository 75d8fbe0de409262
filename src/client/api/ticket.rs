use crate::{
    client::{
        api::helper::{get, parse_empty_response, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::{
        pagination::{ListQuery, Paginated},
        ticket::{CloseTicketDto, NewTicketMessageDto, TicketDto, TicketMessageDto},
    },
};

pub async fn get_tickets(
    guild_id: u64,
    query: &ListQuery,
) -> Result<Paginated<TicketDto>, ApiError> {
    let url = format!(
        "/api/guilds/{}/tickets?{}",
        guild_id,
        query.to_query_string()
    );
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn get_ticket(guild_id: u64, ticket_id: &str) -> Result<TicketDto, ApiError> {
    let url = format!("/api/guilds/{}/tickets/{}", guild_id, ticket_id);
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn get_ticket_messages(
    guild_id: u64,
    ticket_id: &str,
) -> Result<Vec<TicketMessageDto>, ApiError> {
    let url = format!("/api/guilds/{}/tickets/{}/messages", guild_id, ticket_id);
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn post_ticket_message(
    guild_id: u64,
    ticket_id: &str,
    message: &NewTicketMessageDto,
) -> Result<(), ApiError> {
    let url = format!("/api/guilds/{}/tickets/{}/messages", guild_id, ticket_id);
    let body = serialize_json(message)?;
    let request = post(&url).body(body);
    let response = send_request(request).await?;
    parse_empty_response(response).await
}

pub async fn close_ticket(
    guild_id: u64,
    ticket_id: &str,
    payload: &CloseTicketDto,
) -> Result<(), ApiError> {
    let url = format!("/api/guilds/{}/tickets/{}/close", guild_id, ticket_id);
    let body = serialize_json(payload)?;
    let request = post(&url).body(body);
    let response = send_request(request).await?;
    parse_empty_response(response).await
}
