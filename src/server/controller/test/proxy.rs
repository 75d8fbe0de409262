use super::*;
use crate::{
    model::pagination::ListQuery,
    server::controller::{billing, guild, moderation, settings, ticket, verification},
};

const USER_ID: u64 = 123456789;
const GUILD_ID: u64 = 1000;

/// Tests a proxied call without a session.
///
/// Expected: 401 `{"error":"Unauthorized"}` and nothing sent upstream
#[tokio::test]
async fn unauthenticated_request_never_reaches_upstream() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let upstream = MockServer::respond_with(200, json!({})).await.unwrap();
    let state = app_state(db, UNREACHABLE_URL, &upstream.base_url);

    let response = respond(
        guild::get_channels(State(state), session.clone(), Path(GUILD_ID)).await,
    );

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await, json!({ "error": "Unauthorized" }));
    assert!(upstream.requests().is_empty());

    Ok(())
}

/// Tests malformed path segments without a session.
///
/// Expected: 401 for a bad sanction id, unknown section, unknown list and unknown
/// decision alike, and nothing sent upstream
#[tokio::test]
async fn unauthenticated_request_is_rejected_before_path_validation() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let upstream = MockServer::respond_with(200, json!({})).await.unwrap();
    let state = app_state(db, UNREACHABLE_URL, &upstream.base_url);

    let responses = vec![
        respond(
            moderation::revoke_sanction(
                State(state.clone()),
                session.clone(),
                Path((GUILD_ID, "a b".to_string())),
            )
            .await,
        ),
        respond(
            settings::get_settings(
                State(state.clone()),
                session.clone(),
                Path((GUILD_ID, "anti-nuke".to_string())),
            )
            .await,
        ),
        respond(
            moderation::add_list_entry(
                State(state.clone()),
                session.clone(),
                Path((GUILD_ID, "greylist".to_string())),
                Bytes::new(),
            )
            .await,
        ),
        respond(
            verification::review_verification(
                State(state.clone()),
                session.clone(),
                Path((GUILD_ID, "..".to_string(), "maybe".to_string())),
                Bytes::new(),
            )
            .await,
        ),
        respond(
            ticket::close_ticket(
                State(state),
                session.clone(),
                Path((GUILD_ID, "../admin".to_string())),
                Bytes::new(),
            )
            .await,
        ),
    ];

    for response in responses {
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
    assert!(upstream.requests().is_empty());

    Ok(())
}

/// Tests a proxied call for a guild the user cannot manage.
///
/// Expected: 403 and nothing sent upstream
#[tokio::test]
async fn foreign_guild_is_forbidden() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let upstream = MockServer::respond_with(200, json!({})).await.unwrap();
    let state = app_state(db, UNREACHABLE_URL, &upstream.base_url);

    factory::create_user_with_id(db, USER_ID.to_string()).await?;
    log_in(session, USER_ID).await?;
    cache_guilds(session, &[GUILD_ID]).await?;

    let response = respond(
        guild::get_guild(State(state), session.clone(), Path(9999)).await,
    );

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(upstream.requests().is_empty());

    Ok(())
}

/// Tests that the upstream answer is relayed unchanged.
///
/// Expected: upstream status and JSON body, actor id header sent
#[tokio::test]
async fn relays_upstream_response() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let upstream = MockServer::respond_with(
        409,
        json!({ "error": "Ticket already closed" }),
    )
    .await
    .unwrap();
    let state = app_state(db, UNREACHABLE_URL, &upstream.base_url);

    factory::create_user_with_id(db, USER_ID.to_string()).await?;
    log_in(session, USER_ID).await?;
    cache_guilds(session, &[GUILD_ID]).await?;

    let response = respond(
        ticket::close_ticket(
            State(state),
            session.clone(),
            Path((GUILD_ID, "tkt_1".to_string())),
            Bytes::from_static(br#"{"reason":"resolved"}"#),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        json_body(response).await,
        json!({ "error": "Ticket already closed" })
    );

    let request = upstream.last_request().unwrap();
    assert_eq!(request.path, "/guilds/1000/tickets/tkt_1/close");
    assert_eq!(request.header("x-actor-id"), Some("123456789"));
    assert_eq!(request.json(), Some(json!({ "reason": "resolved" })));

    Ok(())
}

/// Tests an unreachable external API.
///
/// Expected: 500 with the static body
#[tokio::test]
async fn unreachable_upstream_is_internal_error() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = app_state(db, UNREACHABLE_URL, UNREACHABLE_URL);

    factory::create_user_with_id(db, USER_ID.to_string()).await?;
    log_in(session, USER_ID).await?;
    cache_guilds(session, &[GUILD_ID]).await?;

    let response = respond(billing::get_quota(State(state), session.clone(), Path(GUILD_ID)).await);

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await,
        json!({ "error": "Internal server error" })
    );

    Ok(())
}

/// Tests the settings routes with a known section.
///
/// Expected: GET and PATCH forwarded to the same section path
#[tokio::test]
async fn forwards_settings_section() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let upstream = MockServer::respond_with(200, json!({ "enabled": true }))
        .await
        .unwrap();
    let state = app_state(db, UNREACHABLE_URL, &upstream.base_url);

    factory::create_user_with_id(db, USER_ID.to_string()).await?;
    log_in(session, USER_ID).await?;
    cache_guilds(session, &[GUILD_ID]).await?;

    let response = respond(
        settings::get_settings(
            State(state.clone()),
            session.clone(),
            Path((GUILD_ID, "auto-moderation".to_string())),
        )
        .await,
    );
    assert_eq!(response.status(), StatusCode::OK);

    let response = respond(
        settings::update_settings(
            State(state),
            session.clone(),
            Path((GUILD_ID, "auto-moderation".to_string())),
            Bytes::from_static(br#"{"block_invites":true}"#),
        )
        .await,
    );
    assert_eq!(response.status(), StatusCode::OK);

    let requests = upstream.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, axum::http::Method::GET);
    assert_eq!(requests[0].path, "/guilds/1000/settings/auto-moderation");
    assert_eq!(requests[1].method, axum::http::Method::PATCH);
    assert_eq!(requests[1].json(), Some(json!({ "block_invites": true })));

    Ok(())
}

/// Tests an unknown settings section.
///
/// Expected: 404 without contacting the external API
#[tokio::test]
async fn unknown_settings_section_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let upstream = MockServer::respond_with(200, json!({})).await.unwrap();
    let state = app_state(db, UNREACHABLE_URL, &upstream.base_url);

    factory::create_user_with_id(db, USER_ID.to_string()).await?;
    log_in(session, USER_ID).await?;
    cache_guilds(session, &[GUILD_ID]).await?;

    let response = respond(
        settings::get_settings(
            State(state),
            session.clone(),
            Path((GUILD_ID, "economy".to_string())),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(upstream.requests().is_empty());

    Ok(())
}

/// Tests blacklist routes and an unknown list name.
///
/// Expected: POST forwarded to `/blacklist`, unknown list 404
#[tokio::test]
async fn forwards_blacklist_and_rejects_unknown_list() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let upstream = MockServer::respond_with(201, json!({ "user_id": "55" }))
        .await
        .unwrap();
    let state = app_state(db, UNREACHABLE_URL, &upstream.base_url);

    factory::create_user_with_id(db, USER_ID.to_string()).await?;
    log_in(session, USER_ID).await?;
    cache_guilds(session, &[GUILD_ID]).await?;

    let response = respond(
        moderation::add_list_entry(
            State(state.clone()),
            session.clone(),
            Path((GUILD_ID, "blacklist".to_string())),
            Bytes::from_static(br#"{"user_id":"55","reason":"raider"}"#),
        )
        .await,
    );
    assert_eq!(response.status(), StatusCode::CREATED);

    let request = upstream.last_request().unwrap();
    assert_eq!(request.path, "/guilds/1000/blacklist");
    assert_eq!(request.header("content-type"), Some("application/json"));

    let response = respond(
        moderation::get_list_entries(
            State(state),
            session.clone(),
            Path((GUILD_ID, "greylist".to_string())),
            Query(ListQuery::default()),
        )
        .await,
    );
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(upstream.requests().len(), 1);

    Ok(())
}

/// Tests that paged lists forward the normalised query.
///
/// Expected: `page=2&limit=25&kind=ban` on the sanctions request
#[tokio::test]
async fn forwards_list_query() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let upstream = MockServer::respond_with(200, json!({ "items": [], "total": 0 }))
        .await
        .unwrap();
    let state = app_state(db, UNREACHABLE_URL, &upstream.base_url);

    factory::create_user_with_id(db, USER_ID.to_string()).await?;
    log_in(session, USER_ID).await?;
    cache_guilds(session, &[GUILD_ID]).await?;

    respond(
        moderation::get_sanctions(
            State(state),
            session.clone(),
            Path(GUILD_ID),
            Query(ListQuery::new(2, 25).kind("ban").search("  ")),
        )
        .await,
    );

    let request = upstream.last_request().unwrap();
    assert_eq!(request.path, "/guilds/1000/sanctions");
    assert_eq!(request.query.as_deref(), Some("page=2&limit=25&kind=ban"));

    Ok(())
}

/// Tests the verification review route.
///
/// Expected: approve forwarded, unknown decision 404, bad id 400
#[tokio::test]
async fn reviews_verification() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let upstream = MockServer::respond_with(200, json!({ "status": "approved" }))
        .await
        .unwrap();
    let state = app_state(db, UNREACHABLE_URL, &upstream.base_url);

    factory::create_user_with_id(db, USER_ID.to_string()).await?;
    log_in(session, USER_ID).await?;
    cache_guilds(session, &[GUILD_ID]).await?;

    let response = respond(
        verification::review_verification(
            State(state.clone()),
            session.clone(),
            Path((GUILD_ID, "ver_9".to_string(), "approve".to_string())),
            Bytes::new(),
        )
        .await,
    );
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        upstream.last_request().unwrap().path,
        "/guilds/1000/verifications/ver_9/approve"
    );

    let response = respond(
        verification::review_verification(
            State(state.clone()),
            session.clone(),
            Path((GUILD_ID, "ver_9".to_string(), "maybe".to_string())),
            Bytes::new(),
        )
        .await,
    );
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = respond(
        verification::review_verification(
            State(state),
            session.clone(),
            Path((GUILD_ID, "..".to_string(), "deny".to_string())),
            Bytes::new(),
        )
        .await,
    );
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(upstream.requests().len(), 1);

    Ok(())
}

/// Tests the session-only plans route.
///
/// Expected: forwarded to `/billing/plans` without any guild check
#[tokio::test]
async fn plans_only_need_a_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let upstream = MockServer::respond_with(200, json!([{ "id": "premium", "name": "Premium" }]))
        .await
        .unwrap();
    let state = app_state(db, UNREACHABLE_URL, &upstream.base_url);

    factory::create_user_with_id(db, USER_ID.to_string()).await?;
    log_in(session, USER_ID).await?;

    let response = respond(billing::get_plans(State(state), session.clone()).await);

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(upstream.last_request().unwrap().path, "/billing/plans");

    Ok(())
}
