use super::*;
use crate::model::guild::GuildDto;
use chrono::Utc;
use std::time::Duration;

/// Tests storing and reading back the logged in user.
///
/// Expected: None before login, Some(id) after
#[tokio::test]
async fn stores_user_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let auth_session = AuthSession::new(session);
    assert_eq!(auth_session.get_user_id().await?, None);

    auth_session.set_user_id(1184553306335662110).await?;
    assert_eq!(auth_session.get_user_id().await?, Some(1184553306335662110));

    Ok(())
}

/// Tests that the CSRF token can only be taken once.
///
/// Expected: Some(token) on first take, None on second
#[tokio::test]
async fn csrf_token_is_single_use() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let csrf_session = CsrfSession::new(session);
    csrf_session.set_token("state-token".to_string()).await?;

    assert_eq!(
        csrf_session.take_token().await?,
        Some("state-token".to_string())
    );
    assert_eq!(csrf_session.take_token().await?, None);

    Ok(())
}

/// Tests that clearing the session logs the user out and drops the Discord token.
///
/// Expected: no user id and no token after clear
#[tokio::test]
async fn clear_removes_everything() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    log_in(session, 42).await?;
    cache_guilds(session, &[1, 2]).await?;

    AuthSession::new(session).clear().await;

    assert_eq!(AuthSession::new(session).get_user_id().await?, None);
    assert_eq!(
        DiscordTokenSession::new(session).get_access_token().await?,
        None
    );
    assert_eq!(GuildCacheSession::new(session).get().await?, None);

    Ok(())
}

/// Tests the guild cache round trip and explicit invalidation.
///
/// Expected: Some(cache) after set, None after clear
#[tokio::test]
async fn guild_cache_round_trip() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let cache = GuildCacheSession::new(session);
    let cached = CachedGuilds::new(vec![GuildDto {
        id: 7,
        name: "Seven".to_string(),
        icon: Some("hash".to_string()),
        owner: true,
    }]);
    cache.set(&cached).await?;

    let stored = cache.get().await?.unwrap();
    assert_eq!(stored, cached);
    assert!(stored.contains(7));
    assert!(!stored.contains(8));

    cache.clear().await?;
    assert_eq!(cache.get().await?, None);

    Ok(())
}

/// Tests cache freshness against the TTL.
///
/// Expected: fresh right after fetch, stale once the TTL has passed
#[test]
fn cache_expires_after_ttl() {
    let cached = CachedGuilds::new(Vec::new());
    let ttl = Duration::from_secs(300);

    assert!(cached.is_fresh(ttl, Utc::now()));
    assert!(cached.is_fresh(ttl, cached.fetched_at + chrono::Duration::seconds(299)));
    assert!(!cached.is_fresh(ttl, cached.fetched_at + chrono::Duration::seconds(300)));
}

/// Tests that a corrupt user id in the session is an internal error, not a logout.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn corrupt_user_id_is_internal_error() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    session.insert("auth:user", "not-a-number").await?;

    assert!(matches!(
        AuthSession::new(session).get_user_id().await,
        Err(AppError::InternalErr(_))
    ));

    Ok(())
}
