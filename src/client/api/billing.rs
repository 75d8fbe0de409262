use crate::{
    client::{
        api::helper::{
            get, parse_empty_response, parse_optional_response, parse_response, post,
            send_request, serialize_json,
        },
        model::error::ApiError,
    },
    model::billing::{CheckoutRequestDto, CheckoutResponseDto, PlanDto, QuotaDto, SubscriptionDto},
};

pub async fn get_plans() -> Result<Vec<PlanDto>, ApiError> {
    let request = get("/api/billing/plans");
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn get_quota(guild_id: u64) -> Result<QuotaDto, ApiError> {
    let url = format!("/api/guilds/{}/quota", guild_id);
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

/// Returns `None` for guilds that never subscribed.
pub async fn get_subscription(guild_id: u64) -> Result<Option<SubscriptionDto>, ApiError> {
    let url = format!("/api/guilds/{}/subscription", guild_id);
    let request = get(&url);
    let response = send_request(request).await?;
    parse_optional_response(response).await
}

pub async fn create_checkout(
    guild_id: u64,
    checkout: &CheckoutRequestDto,
) -> Result<CheckoutResponseDto, ApiError> {
    let url = format!("/api/guilds/{}/subscription/checkout", guild_id);
    let body = serialize_json(checkout)?;
    let request = post(&url).body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn cancel_subscription(guild_id: u64) -> Result<(), ApiError> {
    let url = format!("/api/guilds/{}/subscription/cancel", guild_id);
    let request = post(&url);
    let response = send_request(request).await?;
    parse_empty_response(response).await
}
