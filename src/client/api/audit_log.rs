use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::{
        audit_log::AuditLogEntryDto,
        pagination::{ListQuery, Paginated},
    },
};

pub async fn get_audit_logs(
    guild_id: u64,
    query: &ListQuery,
) -> Result<Paginated<AuditLogEntryDto>, ApiError> {
    let url = format!(
        "/api/guilds/{}/audit-logs?{}",
        guild_id,
        query.to_query_string()
    );
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}
