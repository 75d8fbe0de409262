use dioxus_logger::tracing;
use oauth2::{AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config, error::AppError, service::upstream::UpstreamClient, state::OAuth2Client,
};

/// Sessions expire after this long without a request.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database connected and migrations applied");

    Ok(db)
}

/// Creates the SQLite backed session store and the layer that serves it.
///
/// The store shares the SeaORM connection pool. The store itself is returned as well
/// so the cleanup job can delete expired rows.
///
/// # Returns
/// - `Ok((SessionManagerLayer, SqliteStore))` - Layer for the router plus the store handle
/// - `Err(AppError::DbErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<(SessionManagerLayer<SqliteStore>, SqliteStore), AppError> {
    let pool = db.get_sqlite_connection_pool().clone();
    let session_store = SqliteStore::new(pool);

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    let session_layer = SessionManagerLayer::new(session_store.clone())
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS)));

    Ok((session_layer, session_store))
}

/// Builds the shared HTTP client.
///
/// Redirects are never followed; every outgoing request goes to a configured host.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .user_agent(concat!("sentralyx-dashboard/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}

pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let client = oauth2::basic::BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(AuthUrl::new(config.discord_auth_url.clone()).map_err(config_err)?)
        .set_token_uri(TokenUrl::new(config.discord_token_url.clone()).map_err(config_err)?)
        .set_redirect_uri(
            RedirectUrl::new(config.discord_redirect_url.clone()).map_err(config_err)?,
        );

    Ok(client)
}

pub fn setup_upstream_client(config: &Config, http_client: &reqwest::Client) -> UpstreamClient {
    UpstreamClient::new(
        http_client.clone(),
        config.upstream_api_url.clone(),
        config.upstream_api_token.clone(),
    )
}

fn config_err(err: oauth2::url::ParseError) -> AppError {
    crate::server::error::config::ConfigError::from(err).into()
}
