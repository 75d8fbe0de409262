use super::*;
use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::json;
use test_utils::{discord, mock::MockServer};

/// Tests the guard without a logged in user.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_missing_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = app_state(db, UNREACHABLE_URL, UNREACHABLE_URL);

    let result = AuthGuard::new(&state, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a user that is not in the database.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = app_state(db, UNREACHABLE_URL, UNREACHABLE_URL);

    log_in(session, 555).await?;

    let result = AuthGuard::new(&state, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(555)))
    ));

    Ok(())
}

/// Tests a logged in user without extra permissions.
///
/// Expected: Ok(User)
#[tokio::test]
async fn allows_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = app_state(db, UNREACHABLE_URL, UNREACHABLE_URL);

    factory::create_user_with_id(db, "123456789").await?;
    log_in(session, 123456789).await?;

    let user = AuthGuard::new(&state, session).require(&[]).await?;
    assert_eq!(user.discord_id, 123456789);

    Ok(())
}

/// Tests manage access answered from a fresh guild cache.
///
/// Discord is unreachable, so any fetch would fail the test.
///
/// Expected: Ok(User)
#[tokio::test]
async fn allows_cached_manageable_guild() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = app_state(db, UNREACHABLE_URL, UNREACHABLE_URL);

    factory::create_user_with_id(db, "123456789").await?;
    log_in(session, 123456789).await?;
    cache_guilds(session, &[1000, 2000]).await?;

    let user = AuthGuard::new(&state, session)
        .require(&[Permission::ManageGuild(2000)])
        .await?;
    assert_eq!(user.discord_id, 123456789);

    Ok(())
}

/// Tests manage access for a guild outside the cached set.
///
/// Expected: Err(AuthError::AccessDenied) which renders as 403
#[tokio::test]
async fn denies_guild_outside_cached_set() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = app_state(db, UNREACHABLE_URL, UNREACHABLE_URL);

    factory::create_user_with_id(db, "123456789").await?;
    log_in(session, 123456789).await?;
    cache_guilds(session, &[1000]).await?;

    let result = AuthGuard::new(&state, session)
        .require(&[Permission::ManageGuild(3000)])
        .await;

    let Err(err) = result else {
        panic!("expected access to be denied");
    };
    assert!(matches!(
        err,
        AppError::AuthErr(AuthError::AccessDenied(123456789, _))
    ));
    assert_eq!(
        axum::response::IntoResponse::into_response(err).status(),
        StatusCode::FORBIDDEN
    );

    Ok(())
}

/// Tests that without a cache the guard asks Discord and applies the permission filter.
///
/// Expected: Ok for the MANAGE_GUILD guild, AccessDenied for the member-only guild
#[tokio::test]
async fn fetches_guilds_from_discord_when_not_cached() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let discord_api = MockServer::start(Router::new().route(
        "/users/@me/guilds",
        get(|| async {
            Json(json!([
                discord::user_guild(1000, "Managed", false, discord::MANAGE_GUILD),
                discord::user_guild(2000, "Member", false, discord::SEND_MESSAGES),
            ]))
        }),
    ))
    .await
    .unwrap();
    let state = app_state(db, &discord_api.base_url, UNREACHABLE_URL);

    factory::create_user_with_id(db, "123456789").await?;
    log_in(session, 123456789).await?;

    AuthGuard::new(&state, session)
        .require(&[Permission::ManageGuild(1000)])
        .await?;

    let denied = AuthGuard::new(&state, session)
        .require(&[Permission::ManageGuild(2000)])
        .await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    // Second check was answered from the cache.
    assert_eq!(discord_api.requests().len(), 1);
    let request = discord_api.last_request().unwrap();
    assert_eq!(request.header("authorization"), Some("Bearer discord-token"));

    Ok(())
}
