use super::*;
use crate::server::{
    middleware::session::{AuthSession, CachedGuilds, GuildCacheSession},
    service::{discord::DiscordApiClient, guild::GuildService},
};
use axum::http::StatusCode;
use chrono::Utc;
use std::time::Duration;

async fn discord_with_guilds() -> MockServer {
    MockServer::start(Router::new().route(
        "/users/@me/guilds",
        get(|| async {
            Json(json!([
                discord::user_guild(3, "zeta", false, discord::ADMINISTRATOR),
                discord::user_guild(1, "Alpha", true, 0),
                discord::user_guild(2, "member only", false, discord::SEND_MESSAGES),
                discord::user_guild(4, "beta", false, discord::MANAGE_GUILD | discord::SEND_MESSAGES),
            ]))
        }),
    ))
    .await
    .unwrap()
}

/// Tests the owner / ADMINISTRATOR / MANAGE_GUILD filter and name ordering.
///
/// Expected: guilds 1, 4, 3 (Alpha, beta, zeta); guild 2 dropped
#[tokio::test]
async fn keeps_only_manageable_guilds_sorted_by_name() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();
    let discord_api = discord_with_guilds().await;
    let http = reqwest::Client::new();

    log_in(session, 9).await?;

    let service = GuildService::new(
        DiscordApiClient::new(&http, &discord_api.base_url),
        session,
        Duration::from_secs(300),
    );
    let guilds = service.manageable_guilds(9).await?;

    let ids: Vec<u64> = guilds.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![1, 4, 3]);
    assert!(guilds[0].owner);

    Ok(())
}

/// Tests that the fetched list is cached in the session.
///
/// Expected: one Discord request for two lookups
#[tokio::test]
async fn caches_guild_list_in_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();
    let discord_api = discord_with_guilds().await;
    let http = reqwest::Client::new();

    log_in(session, 9).await?;

    let service = GuildService::new(
        DiscordApiClient::new(&http, &discord_api.base_url),
        session,
        Duration::from_secs(300),
    );
    service.manageable_guilds(9).await?;
    assert!(service.can_manage(9, 3).await?);
    assert!(!service.can_manage(9, 2).await?);

    assert_eq!(discord_api.requests().len(), 1);
    assert!(GuildCacheSession::new(session).get().await?.is_some());

    Ok(())
}

/// Tests that a stale cache entry is refreshed.
///
/// Expected: Discord is called and the stale guild disappears
#[tokio::test]
async fn refreshes_stale_cache() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();
    let discord_api = discord_with_guilds().await;
    let http = reqwest::Client::new();

    log_in(session, 9).await?;
    let mut stale = CachedGuilds::new(Vec::new());
    stale.fetched_at = Utc::now() - chrono::Duration::minutes(10);
    GuildCacheSession::new(session).set(&stale).await?;

    let service = GuildService::new(
        DiscordApiClient::new(&http, &discord_api.base_url),
        session,
        Duration::from_secs(300),
    );
    let guilds = service.manageable_guilds(9).await?;

    assert_eq!(guilds.len(), 3);
    assert_eq!(discord_api.requests().len(), 1);

    Ok(())
}

/// Tests that invalidation forces a new fetch.
///
/// Expected: two Discord requests
#[tokio::test]
async fn invalidate_forces_refetch() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();
    let discord_api = discord_with_guilds().await;
    let http = reqwest::Client::new();

    log_in(session, 9).await?;
    cache_guilds(session, &[77]).await?;

    let service = GuildService::new(
        DiscordApiClient::new(&http, &discord_api.base_url),
        session,
        Duration::from_secs(300),
    );
    assert!(service.can_manage(9, 77).await?);
    assert_eq!(discord_api.requests().len(), 0);

    service.invalidate().await?;
    assert!(!service.can_manage(9, 77).await?);
    assert_eq!(discord_api.requests().len(), 1);

    Ok(())
}

/// Tests a session without a Discord token.
///
/// Expected: Err(AuthError::MissingDiscordToken)
#[tokio::test]
async fn requires_discord_token() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();
    let http = reqwest::Client::new();

    AuthSession::new(session).set_user_id(9).await?;

    let service = GuildService::new(
        DiscordApiClient::new(&http, UNREACHABLE_URL),
        session,
        Duration::from_secs(300),
    );

    assert!(matches!(
        service.manageable_guilds(9).await,
        Err(AppError::AuthErr(AuthError::MissingDiscordToken(9)))
    ));

    Ok(())
}

/// Tests that a token rejected by Discord logs the user out.
///
/// Expected: Err(DiscordTokenRejected) and an empty session
#[tokio::test]
async fn rejected_token_clears_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();
    let discord_api = MockServer::respond_with(401, json!({ "message": "401: Unauthorized", "code": 0 }))
        .await
        .unwrap();
    let http = reqwest::Client::new();

    log_in(session, 9).await?;

    let service = GuildService::new(
        DiscordApiClient::new(&http, &discord_api.base_url),
        session,
        Duration::from_secs(300),
    );
    let result = service.manageable_guilds(9).await;

    let Err(err) = result else {
        panic!("expected the token to be rejected");
    };
    assert!(matches!(
        err,
        AppError::AuthErr(AuthError::DiscordTokenRejected)
    ));
    assert_eq!(
        axum::response::IntoResponse::into_response(err).status(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(AuthSession::new(session).get_user_id().await?, None);

    Ok(())
}

/// Tests that Discord outages are not mistaken for a revoked token.
///
/// Expected: Err(ReqwestErr) and the user stays logged in
#[tokio::test]
async fn discord_outage_keeps_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();
    let discord_api = MockServer::respond_with(502, json!({})).await.unwrap();
    let http = reqwest::Client::new();

    log_in(session, 9).await?;

    let service = GuildService::new(
        DiscordApiClient::new(&http, &discord_api.base_url),
        session,
        Duration::from_secs(300),
    );

    assert!(matches!(
        service.manageable_guilds(9).await,
        Err(AppError::ReqwestErr(_))
    ));
    assert_eq!(AuthSession::new(session).get_user_id().await?, Some(9));

    Ok(())
}
