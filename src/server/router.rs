use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use dioxus_logger::tracing;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        billing::{CheckoutRequestDto, CheckoutResponseDto},
        guild::GuildDto,
        moderation::{ListKind, NewListEntryDto},
        settings::SettingsSection,
        ticket::{CloseTicketDto, NewTicketMessageDto},
        user::UserDto,
        verification::{ReviewVerificationDto, VerificationDecision},
    },
    server::{
        controller::{
            audit_log::{self, AUDIT_LOG_TAG},
            auth::{self, AUTH_TAG},
            billing::{self, BILLING_TAG},
            bot::{self, BOT_TAG},
            guild::{self, GUILD_TAG},
            moderation::{self, MODERATION_TAG},
            settings::{self, SETTINGS_TAG},
            ticket::{self, TICKET_TAG},
            verification::{self, VERIFICATION_TAG},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sentralyx Dashboard API",
        description = "Session authenticated proxy between the dashboard and the Sentralyx moderation API"
    ),
    paths(
        auth::login,
        auth::callback,
        auth::logout,
        auth::get_user,
        bot::invite,
        guild::get_guilds,
        guild::get_guild,
        guild::get_channels,
        guild::get_roles,
        settings::get_settings,
        settings::update_settings,
        moderation::get_members,
        moderation::get_sanctions,
        moderation::revoke_sanction,
        moderation::get_list_entries,
        moderation::add_list_entry,
        moderation::remove_list_entry,
        audit_log::get_audit_logs,
        ticket::get_tickets,
        ticket::get_ticket,
        ticket::get_ticket_messages,
        ticket::post_ticket_message,
        ticket::close_ticket,
        verification::get_verifications,
        verification::review_verification,
        billing::get_plans,
        billing::get_quota,
        billing::get_subscription,
        billing::create_checkout,
        billing::cancel_subscription,
    ),
    components(schemas(
        ErrorDto,
        UserDto,
        GuildDto,
        SettingsSection,
        ListKind,
        NewListEntryDto,
        NewTicketMessageDto,
        CloseTicketDto,
        VerificationDecision,
        ReviewVerificationDto,
        CheckoutRequestDto,
        CheckoutResponseDto,
    )),
    tags(
        (name = AUTH_TAG, description = "Discord OAuth2 login"),
        (name = BOT_TAG, description = "Bot invite links"),
        (name = GUILD_TAG, description = "Manageable guilds and guild metadata"),
        (name = SETTINGS_TAG, description = "Per-section guild configuration"),
        (name = MODERATION_TAG, description = "Members, sanctions, blacklist and whitelist"),
        (name = AUDIT_LOG_TAG, description = "Dashboard and bot audit log"),
        (name = TICKET_TAG, description = "Support tickets"),
        (name = VERIFICATION_TAG, description = "Member verification queue"),
        (name = BILLING_TAG, description = "Plans, subscriptions and quota"),
    )
)]
pub struct ApiDoc;

/// Routes under `/api`, without state and session layers.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(auth::login))
        .route("/api/auth/callback", get(auth::callback))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/bot/invite", get(bot::invite))
        .route("/api/billing/plans", get(billing::get_plans))
        .route("/api/guilds", get(guild::get_guilds))
        .route("/api/guilds/{guild_id}", get(guild::get_guild))
        .route("/api/guilds/{guild_id}/channels", get(guild::get_channels))
        .route("/api/guilds/{guild_id}/roles", get(guild::get_roles))
        .route(
            "/api/guilds/{guild_id}/settings/{section}",
            get(settings::get_settings).patch(settings::update_settings),
        )
        .route("/api/guilds/{guild_id}/members", get(moderation::get_members))
        .route(
            "/api/guilds/{guild_id}/sanctions",
            get(moderation::get_sanctions),
        )
        .route(
            "/api/guilds/{guild_id}/sanctions/{sanction_id}",
            delete(moderation::revoke_sanction),
        )
        .route(
            "/api/guilds/{guild_id}/audit-logs",
            get(audit_log::get_audit_logs),
        )
        .route("/api/guilds/{guild_id}/tickets", get(ticket::get_tickets))
        .route(
            "/api/guilds/{guild_id}/tickets/{ticket_id}",
            get(ticket::get_ticket),
        )
        .route(
            "/api/guilds/{guild_id}/tickets/{ticket_id}/messages",
            get(ticket::get_ticket_messages).post(ticket::post_ticket_message),
        )
        .route(
            "/api/guilds/{guild_id}/tickets/{ticket_id}/close",
            post(ticket::close_ticket),
        )
        .route(
            "/api/guilds/{guild_id}/verifications",
            get(verification::get_verifications),
        )
        .route(
            "/api/guilds/{guild_id}/verifications/{verification_id}/{decision}",
            post(verification::review_verification),
        )
        .route("/api/guilds/{guild_id}/quota", get(billing::get_quota))
        .route(
            "/api/guilds/{guild_id}/subscription",
            get(billing::get_subscription),
        )
        .route(
            "/api/guilds/{guild_id}/subscription/checkout",
            post(billing::create_checkout),
        )
        .route(
            "/api/guilds/{guild_id}/subscription/cancel",
            post(billing::cancel_subscription),
        )
        .route(
            "/api/guilds/{guild_id}/{list}",
            get(moderation::get_list_entries).post(moderation::add_list_entry),
        )
        .route(
            "/api/guilds/{guild_id}/{list}/{user_id}",
            delete(moderation::remove_list_entry),
        )
}

/// Full API router with docs, CORS and request tracing.
pub fn router(app_url: &str) -> Router<AppState> {
    let cors = match HeaderValue::from_str(app_url) {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_credentials(true)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PATCH,
                Method::DELETE,
            ])
            .allow_headers([header::CONTENT_TYPE]),
        Err(e) => {
            tracing::warn!("APP_URL is not a valid origin ({}), CORS disabled", e);
            CorsLayer::new()
        }
    };

    api_routes()
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
