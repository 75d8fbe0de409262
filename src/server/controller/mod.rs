//! HTTP request handlers.
//!
//! Only `auth`, `bot` and the guild list are answered locally. Every other handler
//! checks that the session user may manage the guild in the path and then forwards
//! the request to the external API through [`UpstreamClient`](crate::server::service::upstream::UpstreamClient).

pub mod audit_log;
pub mod auth;
pub mod billing;
pub mod bot;
pub mod guild;
pub mod moderation;
pub mod settings;
pub mod ticket;
pub mod verification;

#[cfg(test)]
mod test;

use tower_sessions::Session;

use crate::server::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    service::upstream::{UpstreamRequest, UpstreamResponse},
    state::AppState,
};

/// Requires manage access to `guild_id`, then forwards the request built by `build`.
///
/// `build` receives the Discord id of the acting user.
pub(super) async fn forward_for_guild(
    state: &AppState,
    session: &Session,
    guild_id: u64,
    build: impl FnOnce(u64) -> UpstreamRequest,
) -> Result<UpstreamResponse, AppError> {
    try_forward_for_guild(state, session, guild_id, |actor| Ok(build(actor))).await
}

/// Like [`forward_for_guild`], for requests whose path segments still need validating.
///
/// `build` only runs once the session user is known to manage the guild, so a
/// logged out caller gets `401` whatever the rest of the path looks like.
pub(super) async fn try_forward_for_guild(
    state: &AppState,
    session: &Session,
    guild_id: u64,
    build: impl FnOnce(u64) -> Result<UpstreamRequest, AppError>,
) -> Result<UpstreamResponse, AppError> {
    let user = AuthGuard::new(state, session)
        .require(&[Permission::ManageGuild(guild_id)])
        .await?;

    state.upstream.forward(build(user.discord_id)?).await
}
