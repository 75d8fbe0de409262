use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
    service::{discord::DiscordApiClient, guild::GuildService},
    state::AppState,
};

pub enum Permission {
    /// Owner, `ADMINISTRATOR` or `MANAGE_GUILD` in the given guild.
    ManageGuild(u64),
}

/// Resolves the session user and checks the requested permissions.
pub struct AuthGuard<'a> {
    state: &'a AppState,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(state: &'a AppState, session: &'a Session) -> Self {
        Self { state, session }
    }

    /// # Returns
    /// - `Ok(User)` - Logged in and every permission holds
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session points at a deleted user
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(&self.state.db)
            .find_by_discord_id(user_id)
            .await?
        else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::ManageGuild(guild_id) => {
                    let guild_service = GuildService::new(
                        DiscordApiClient::new(
                            &self.state.http_client,
                            &self.state.discord_api_url,
                        ),
                        self.session,
                        self.state.guild_cache_ttl,
                    );

                    if !guild_service.can_manage(user_id, *guild_id).await? {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!("User attempted to access guild {} without manage permission", guild_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
