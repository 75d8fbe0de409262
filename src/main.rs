mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{
            config::Config, scheduler::session_cleanup, startup, state::AppState,
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let (session, session_store) = startup::connect_to_session(&db).await?;
        let http_client = startup::setup_reqwest_client()?;
        let oauth_client = startup::setup_oauth_client(&config)?;
        let upstream = startup::setup_upstream_client(&config, &http_client);

        tracing::info!("Starting server, proxying to {}", upstream.base_url());

        // Scheduler keeps running in the background once started
        session_cleanup::start_scheduler(session_store).await?;

        let state = AppState {
            db,
            http_client,
            oauth_client,
            upstream,
            discord_api_url: config.discord_api_url.clone(),
            discord_client_id: config.discord_client_id.clone(),
            bot_invite_permissions: config.bot_invite_permissions,
            guild_cache_ttl: config.guild_cache_ttl,
            app_url: config.app_url.clone(),
        };

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router(&config.app_url)
            .with_state(state)
            .layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
