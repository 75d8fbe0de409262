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
        verification::{ReviewVerificationDto, VerificationDecision},
    },
    server::{
        controller::{forward_for_guild, try_forward_for_guild},
        error::AppError,
        service::upstream::UpstreamRequest,
        state::AppState,
        util::parse::validate_path_id,
    },
};

pub static VERIFICATION_TAG: &str = "verification";

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/verifications",
    tag = VERIFICATION_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ListQuery
    ),
    responses(
        (status = 200, description = "Page of verification requests, optionally filtered by `status`"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User cannot manage this guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_verifications(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    forward_for_guild(&state, &session, guild_id, |actor| {
        UpstreamRequest::get(format!("/guilds/{}/verifications", guild_id), actor)
            .with_query(query)
    })
    .await
}

#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/verifications/{verification_id}/{decision}",
    tag = VERIFICATION_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("verification_id" = String, Path, description = "Verification request ID"),
        ("decision" = VerificationDecision, Path, description = "`approve` or `deny`")
    ),
    request_body = ReviewVerificationDto,
    responses(
        (status = 200, description = "Verification request reviewed"),
        (status = 400, description = "Malformed verification id", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User cannot manage this guild", body = ErrorDto),
        (status = 404, description = "Unknown decision", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn review_verification(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, verification_id, decision)): Path<(u64, String, String)>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    try_forward_for_guild(&state, &session, guild_id, |actor| {
        let decision = decision
            .parse::<VerificationDecision>()
            .map_err(AppError::NotFound)?;
        let verification_id = validate_path_id(&verification_id)?;

        Ok(UpstreamRequest::new(
            Method::POST,
            format!(
                "/guilds/{}/verifications/{}/{}",
                guild_id, verification_id, decision
            ),
            actor,
        )
        .with_body(body))
    })
    .await
}
