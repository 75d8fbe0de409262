use super::*;
use crate::server::{data::user::UserRepository, service::auth::AuthService};
use axum::routing::post;

async fn discord_oauth_server() -> MockServer {
    MockServer::start(
        Router::new()
            .route(
                "/oauth2/token",
                post(|| async {
                    Json(json!({
                        "access_token": "fresh-access-token",
                        "token_type": "Bearer",
                        "expires_in": 604800,
                        "refresh_token": "refresh",
                        "scope": "identify guilds"
                    }))
                }),
            )
            .route(
                "/users/@me",
                get(|| async { Json(discord::current_user(123456789, "fluffy", Some("Fluffy"))) }),
            ),
    )
    .await
    .unwrap()
}

/// Tests the login URL.
///
/// Expected: client id, both scopes and a state parameter matching the CSRF token
#[tokio::test]
async fn login_url_requests_identify_and_guilds() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let db = test.database().await.unwrap();
    let state = app_state(db, UNREACHABLE_URL, UNREACHABLE_URL);

    let service = AuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.discord_api_url,
    );
    let (url, csrf) = service.login_url();

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert!(pairs.contains(&("client_id".to_string(), "1234".to_string())));
    assert!(pairs.contains(&("scope".to_string(), "identify guilds".to_string())));
    assert!(pairs.contains(&("state".to_string(), csrf.secret().to_string())));

    Ok(())
}

/// Tests the full code exchange against a fake Discord.
///
/// Expected: user stored with the Discord profile, access token returned
#[tokio::test]
async fn callback_exchanges_code_and_stores_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();
    let discord_api = discord_oauth_server().await;
    let state = app_state(db, &discord_api.base_url, UNREACHABLE_URL);

    let service = AuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.discord_api_url,
    );
    let (user, access_token) = service.callback("auth-code".to_string()).await?;

    assert_eq!(access_token, "fresh-access-token");
    assert_eq!(user.discord_id, 123456789);
    assert_eq!(user.name, "fluffy");
    assert_eq!(user.global_name.as_deref(), Some("Fluffy"));

    let stored = UserRepository::new(db).find_by_discord_id(123456789).await?;
    assert!(stored.is_some());

    let me_request = discord_api
        .requests()
        .into_iter()
        .find(|r| r.path == "/users/@me")
        .unwrap();
    assert_eq!(
        me_request.header("authorization"),
        Some("Bearer fresh-access-token")
    );

    Ok(())
}

/// Tests a code Discord refuses.
///
/// Expected: Err(AuthError::TokenExchangeFailed)
#[tokio::test]
async fn callback_rejects_invalid_code() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();
    let discord_api = MockServer::respond_with(
        400,
        json!({ "error": "invalid_grant", "error_description": "Invalid \"code\" in request." }),
    )
    .await
    .unwrap();
    let state = app_state(db, &discord_api.base_url, UNREACHABLE_URL);

    let service = AuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.discord_api_url,
    );

    assert!(matches!(
        service.callback("bad-code".to_string()).await,
        Err(AppError::AuthErr(AuthError::TokenExchangeFailed(_)))
    ));

    Ok(())
}
