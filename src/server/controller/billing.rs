use axum::{
    body::Bytes,
    extract::{Path, State},
    http::Method,
    response::IntoResponse,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, billing::CheckoutRequestDto},
    server::{
        controller::forward_for_guild, error::AppError, middleware::auth::AuthGuard,
        service::upstream::UpstreamRequest, state::AppState,
    },
};

pub static BILLING_TAG: &str = "billing";

#[utoipa::path(
    get,
    path = "/api/billing/plans",
    tag = BILLING_TAG,
    responses(
        (status = 200, description = "Available subscription plans"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_plans(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &session).require(&[]).await?;

    state
        .upstream
        .forward(UpstreamRequest::get("/billing/plans", user.discord_id))
        .await
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/quota",
    tag = BILLING_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Usage against the guild's plan limits"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User cannot manage this guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_quota(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    forward_for_guild(&state, &session, guild_id, |actor| {
        UpstreamRequest::get(format!("/guilds/{}/quota", guild_id), actor)
    })
    .await
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/subscription",
    tag = BILLING_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Current subscription of the guild"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User cannot manage this guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subscription(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    forward_for_guild(&state, &session, guild_id, |actor| {
        UpstreamRequest::get(format!("/guilds/{}/subscription", guild_id), actor)
    })
    .await
}

#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/subscription/checkout",
    tag = BILLING_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body = CheckoutRequestDto,
    responses(
        (status = 200, description = "Checkout session with the payment page URL"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User cannot manage this guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_checkout(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    forward_for_guild(&state, &session, guild_id, |actor| {
        UpstreamRequest::new(
            Method::POST,
            format!("/guilds/{}/subscription/checkout", guild_id),
            actor,
        )
        .with_body(body)
    })
    .await
}

#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/subscription/cancel",
    tag = BILLING_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Subscription set to cancel at period end"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User cannot manage this guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_subscription(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    forward_for_guild(&state, &session, guild_id, |actor| {
        UpstreamRequest::new(
            Method::POST,
            format!("/guilds/{}/subscription/cancel", guild_id),
            actor,
        )
    })
    .await
}
