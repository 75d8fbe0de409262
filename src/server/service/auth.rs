use oauth2::{AuthorizationCode, CsrfToken, Scope, TokenResponse};
use sea_orm::DatabaseConnection;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::discord::DiscordApiClient,
    state::OAuth2Client,
};

/// Service for the Discord OAuth2 login flow.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
    pub discord_api_url: &'a str,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        discord_api_url: &'a str,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            discord_api_url,
        }
    }

    /// Generates a Discord OAuth2 login URL with CSRF protection.
    ///
    /// Requests the `identify` and `guilds` scopes, the latter being needed to find
    /// the guilds the user can manage.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Authorization URL and the state token to store in the session
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .add_scope(Scope::new("guilds".to_string()))
            .url()
    }

    /// Handles the OAuth2 callback.
    ///
    /// Exchanges the authorization code, fetches the Discord profile and records the
    /// login.
    ///
    /// # Returns
    /// - `Ok((User, String))` - The stored user and their Discord access token
    /// - `Err(AuthError::TokenExchangeFailed)` - Discord refused the code
    /// - `Err(AppError::ReqwestErr)` - Failed to fetch the profile
    /// - `Err(AppError::DbErr)` - Failed to store the user
    pub async fn callback(&self, authorization_code: String) -> Result<(User, String), AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchangeFailed(e.to_string()))?;

        let access_token = token.access_token().secret().to_string();

        let user_info = DiscordApiClient::new(self.http_client, self.discord_api_url)
            .current_user(&access_token)
            .await?;

        let user = UserRepository::new(self.db)
            .upsert(user_info.into_upsert_param())
            .await?;

        Ok((user, access_token))
    }
}
