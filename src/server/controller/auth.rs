use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use dioxus_logger::tracing;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::session::{AuthSession, CsrfSession, DiscordTokenSession, GuildCacheSession},
        service::auth::AuthService,
        state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Query parameters Discord appends when redirecting back to the callback.
///
/// `code` and `state` are missing when the user cancelled on the consent screen, in
/// which case `error` is set instead.
#[derive(Deserialize)]
pub struct CallbackParams {
    pub state: Option<String>,
    pub code: Option<String>,
    pub error: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to Discord's OAuth2 consent screen"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.discord_api_url,
    );

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().to_string())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("code" = Option<String>, Query, description = "OAuth2 authorization code"),
        ("state" = Option<String>, Query, description = "CSRF state issued by /api/auth/login"),
        ("error" = Option<String>, Query, description = "Set by Discord when the user cancelled")
    ),
    responses(
        (status = 303, description = "Logged in, redirect to the dashboard"),
        (status = 400, description = "CSRF state mismatch or code exchange failure", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(code), Some(csrf_state)) = (params.code, params.state) else {
        tracing::debug!(
            "OAuth2 callback without code: {}",
            params.error.as_deref().unwrap_or("no error given")
        );
        CsrfSession::new(&session).take_token().await?;
        return Ok(Redirect::to("/login?error=cancelled"));
    };

    validate_csrf(&session, &csrf_state).await?;

    let auth_service = AuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.discord_api_url,
    );
    let (user, access_token) = auth_service.callback(code).await?;

    let auth_session = AuthSession::new(&session);
    auth_session.cycle_id().await?;
    auth_session.set_user_id(user.discord_id).await?;
    DiscordTokenSession::new(&session)
        .set_access_token(access_token)
        .await?;
    GuildCacheSession::new(&session).clear().await?;

    tracing::info!("User {} ({}) logged in", user.name, user.discord_id);

    Ok(Redirect::to("/"))
}

#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 303, description = "Session cleared, redirect to the login page")
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(Redirect::to("/login"))
}

#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The logged in user", body = UserDto),
        (status = 404, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = match AuthSession::new(&session).get_user_id().await? {
        Some(user_id) => {
            UserRepository::new(&state.db)
                .find_by_discord_id(user_id)
                .await?
        }
        None => None,
    };

    let Some(user) = user else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "User not found".to_string(),
            }),
        )
            .into_response());
    };

    Ok((StatusCode::OK, Json(user.into_dto())).into_response())
}

/// Compares the callback state with the token issued at login.
///
/// The stored token is consumed either way.
async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    match stored_state {
        Some(state) if state == csrf_state => Ok(()),
        _ => Err(AuthError::CsrfValidationFailed.into()),
    }
}
