use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, pagination::ListQuery},
    server::{
        controller::forward_for_guild, error::AppError, service::upstream::UpstreamRequest,
        state::AppState,
    },
};

pub static AUDIT_LOG_TAG: &str = "audit_log";

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/audit-logs",
    tag = AUDIT_LOG_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ListQuery
    ),
    responses(
        (status = 200, description = "Page of audit log entries, optionally filtered by `action`"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User cannot manage this guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_audit_logs(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    forward_for_guild(&state, &session, guild_id, |actor| {
        UpstreamRequest::get(format!("/guilds/{}/audit-logs", guild_id), actor).with_query(query)
    })
    .await
}
