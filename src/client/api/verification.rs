use crate::{
    client::{
        api::helper::{get, parse_empty_response, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::{
        pagination::{ListQuery, Paginated},
        verification::{ReviewVerificationDto, VerificationDecision, VerificationDto},
    },
};

pub async fn get_verifications(
    guild_id: u64,
    query: &ListQuery,
) -> Result<Paginated<VerificationDto>, ApiError> {
    let url = format!(
        "/api/guilds/{}/verifications?{}",
        guild_id,
        query.to_query_string()
    );
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn review_verification(
    guild_id: u64,
    verification_id: &str,
    decision: VerificationDecision,
    review: &ReviewVerificationDto,
) -> Result<(), ApiError> {
    let url = format!(
        "/api/guilds/{}/verifications/{}/{}",
        guild_id, verification_id, decision
    );
    let body = serialize_json(review)?;
    let request = post(&url).body(body);
    let response = send_request(request).await?;
    parse_empty_response(response).await
}
