use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session, the request is not logged in.
    #[error("No user in session")]
    UserNotInSession,

    /// Session references a user that no longer exists in the database.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(u64),

    /// Session has a user but no Discord access token to act on their behalf.
    #[error("No Discord access token in session for user {0}")]
    MissingDiscordToken(u64),

    /// Discord rejected the stored access token (expired or revoked).
    #[error("Discord rejected the stored access token")]
    DiscordTokenRejected,

    /// User is logged in but not allowed to perform the action.
    ///
    /// # Fields
    /// - Discord id of the user
    /// - Message describing what was attempted, for the log only
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(u64, String),

    /// CSRF state validation failed during OAuth callback.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Exchanging the authorization code for a token failed.
    #[error("Failed to exchange OAuth2 authorization code: {0}")]
    TokenExchangeFailed(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` / `MissingDiscordToken` /
///   `DiscordTokenRejected` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
/// - `CsrfValidationFailed` / `TokenExchangeFailed` → 400 Bad Request
///
/// Errors are logged at debug level while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession
            | Self::UserNotInDatabase(_)
            | Self::MissingDiscordToken(_)
            | Self::DiscordTokenRejected => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You don't have permission to manage this server",
            ),
            Self::CsrfValidationFailed | Self::TokenExchangeFailed(_) => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
