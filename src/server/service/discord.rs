//! Discord REST calls made with a user's OAuth2 access token.

use axum::http::StatusCode;
use dioxus_logger::tracing;
use serde::de::DeserializeOwned;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::discord::{CurrentUserGuild, DiscordUserInfo},
};

pub struct DiscordApiClient<'a> {
    http: &'a reqwest::Client,
    base_url: &'a str,
}

impl<'a> DiscordApiClient<'a> {
    pub fn new(http: &'a reqwest::Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// `GET /users/@me`
    pub async fn current_user(&self, access_token: &str) -> Result<DiscordUserInfo, AppError> {
        self.get("/users/@me", access_token).await
    }

    /// `GET /users/@me/guilds`
    pub async fn current_user_guilds(
        &self,
        access_token: &str,
    ) -> Result<Vec<CurrentUserGuild>, AppError> {
        self.get("/users/@me/guilds", access_token).await
    }

    /// # Returns
    /// - `Err(AuthError::DiscordTokenRejected)` - Discord answered 401
    /// - `Err(AppError::ReqwestErr)` - Any other non-2xx status or transport failure
    async fn get<T: DeserializeOwned>(&self, path: &str, access_token: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(access_token)
            .send()
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            tracing::debug!("Discord rejected access token on {}", path);
            return Err(AuthError::DiscordTokenRejected.into());
        }

        let value = response.error_for_status()?.json::<T>().await?;

        Ok(value)
    }
}
