use super::*;
use crate::server::{
    controller::{
        auth::{self, CallbackParams},
        guild::{self, GuildListParams},
    },
    middleware::session::{AuthSession, CsrfSession},
};
use axum::{routing::get, Json, Router};
use test_utils::discord;

/// Tests the login redirect.
///
/// Expected: 307 to Discord and a CSRF token stored in the session
#[tokio::test]
async fn login_redirects_to_discord() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = app_state(db, UNREACHABLE_URL, UNREACHABLE_URL);

    let response = respond(auth::login(State(state), session.clone()).await);

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert!(location(&response).starts_with("https://discord.com/oauth2/authorize?"));
    assert!(CsrfSession::new(session).take_token().await?.is_some());

    Ok(())
}

/// Tests a callback whose state doesn't match the stored token.
///
/// Expected: 400 and no user in session
#[tokio::test]
async fn callback_rejects_csrf_mismatch() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = app_state(db, UNREACHABLE_URL, UNREACHABLE_URL);

    CsrfSession::new(session)
        .set_token("expected".to_string())
        .await?;

    let response = respond(
        auth::callback(
            State(state),
            session.clone(),
            Query(CallbackParams {
                state: Some("forged".to_string()),
                code: Some("code".to_string()),
                error: None,
            }),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(AuthSession::new(session).get_user_id().await?, None);
    // The token was consumed by the failed attempt.
    assert_eq!(CsrfSession::new(session).take_token().await?, None);

    Ok(())
}

/// Tests a callback after the user cancelled on Discord.
///
/// Expected: redirect back to the login page
#[tokio::test]
async fn callback_handles_cancelled_consent() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = app_state(db, UNREACHABLE_URL, UNREACHABLE_URL);

    let response = respond(
        auth::callback(
            State(state),
            session.clone(),
            Query(CallbackParams {
                state: Some("whatever".to_string()),
                code: None,
                error: Some("access_denied".to_string()),
            }),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login?error=cancelled");

    Ok(())
}

/// Tests a successful login through the callback.
///
/// Expected: redirect to `/` and the user id stored in the session
#[tokio::test]
async fn callback_logs_user_in() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let discord_api = MockServer::start(
        Router::new()
            .route(
                "/oauth2/token",
                axum::routing::post(|| async {
                    Json(json!({
                        "access_token": "token",
                        "token_type": "Bearer",
                        "expires_in": 604800
                    }))
                }),
            )
            .route(
                "/users/@me",
                get(|| async { Json(discord::current_user(42, "mod", None)) }),
            ),
    )
    .await
    .unwrap();
    let state = app_state(db, &discord_api.base_url, UNREACHABLE_URL);

    CsrfSession::new(session).set_token("csrf".to_string()).await?;

    let response = respond(
        auth::callback(
            State(state),
            session.clone(),
            Query(CallbackParams {
                state: Some("csrf".to_string()),
                code: Some("code".to_string()),
                error: None,
            }),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert_eq!(AuthSession::new(session).get_user_id().await?, Some(42));

    Ok(())
}

/// Tests the current user endpoint.
///
/// Expected: 404 when logged out, 200 with the user when logged in
#[tokio::test]
async fn get_user_reflects_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = app_state(db, UNREACHABLE_URL, UNREACHABLE_URL);

    let response = respond(auth::get_user(State(state.clone()), session.clone()).await);
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    factory::user::UserFactory::new(db)
        .discord_id("77")
        .name("someone")
        .build()
        .await?;
    log_in(session, 77).await?;

    let response = respond(auth::get_user(State(state), session.clone()).await);
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["discord_id"], json!("77"));
    assert_eq!(body["name"], json!("someone"));

    Ok(())
}

/// Tests logout.
///
/// Expected: redirect to `/login` and an empty session
#[tokio::test]
async fn logout_clears_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    log_in(session, 77).await?;

    let response = respond(auth::logout(session.clone()).await);

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
    assert_eq!(AuthSession::new(session).get_user_id().await?, None);

    Ok(())
}

/// Tests the guild list with a forced refresh.
///
/// Expected: cached entry ignored, Discord's filtered list returned
#[tokio::test]
async fn guild_list_refresh_bypasses_cache() -> Result<(), AppError> {
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
                discord::user_guild(5, "Fresh", false, discord::ADMINISTRATOR),
                discord::user_guild(6, "Nope", false, 0),
            ]))
        }),
    ))
    .await
    .unwrap();
    let state = app_state(db, &discord_api.base_url, UNREACHABLE_URL);

    factory::create_user_with_id(db, "77").await?;
    log_in(session, 77).await?;
    cache_guilds(session, &[1]).await?;

    let response = respond(
        guild::get_guilds(
            State(state.clone()),
            session.clone(),
            Query(GuildListParams::default()),
        )
        .await,
    );
    assert_eq!(json_body(response).await[0]["id"], json!("1"));
    assert!(discord_api.requests().is_empty());

    let response = respond(
        guild::get_guilds(
            State(state),
            session.clone(),
            Query(GuildListParams { refresh: true }),
        )
        .await,
    );
    let body = json_body(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], json!("5"));
    assert_eq!(discord_api.requests().len(), 1);

    Ok(())
}
