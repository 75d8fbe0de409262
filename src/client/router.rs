use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresLoggedIn};
use crate::client::route::{
    guild::{
        AuditLog, Billing, GuildLayout, GuildOverview, GuildSettings, Moderation, TicketChat,
        Tickets, Verifications,
    },
    Login, NotFound, Servers,
};
use crate::model::settings::SettingsSection;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/login?:error")]
    Login { error: String },

    #[layout(RequiresLoggedIn)]
    #[route("/")]
    Servers {},

    #[nest("/servers/:guild_id")]
        #[layout(GuildLayout)]
        #[route("/")]
        GuildOverview { guild_id: u64 },

        #[route("/settings/:section")]
        GuildSettings { guild_id: u64, section: SettingsSection },

        #[route("/moderation")]
        Moderation { guild_id: u64 },

        #[route("/audit-log")]
        AuditLog { guild_id: u64 },

        #[route("/tickets")]
        Tickets { guild_id: u64 },

        #[route("/tickets/:ticket_id")]
        TicketChat { guild_id: u64, ticket_id: String },

        #[route("/verifications")]
        Verifications { guild_id: u64 },

        #[route("/billing")]
        Billing { guild_id: u64 },
        #[end_layout]
    #[end_nest]
    #[end_layout]
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
