use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::{AuthSession, CachedGuilds, CsrfSession, DiscordTokenSession, GuildCacheSession},
    },
    test_support::{app_state, cache_guilds, log_in, UNREACHABLE_URL},
};
use test_utils::{builder::TestBuilder, factory};

mod auth;
mod session;
