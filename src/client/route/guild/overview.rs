use dioxus::prelude::*;

use crate::{
    client::{
        component::ErrorAlert,
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
    },
    model::{guild::GuildOverviewDto, settings::SettingsSection},
};

#[cfg(feature = "web")]
use crate::client::api::guild::get_guild_overview;

#[component]
pub fn GuildOverview(guild_id: u64) -> Element {
    let mut overview = use_signal(|| None::<Result<Option<GuildOverviewDto>, ApiError>>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(use_reactive!(|guild_id| async move {
            get_guild_overview(guild_id).await
        }));

        use_effect(move || {
            if let Some(result) = &*future.read() {
                overview.set(Some(result.clone()));
            }
        });
    }

    rsx! {
        Title { "Overview | {SITE_NAME}" }
        h1 { class: "text-2xl font-bold mb-6", "Overview" }
        match overview() {
            None => rsx! { span { class: "loading loading-spinner" } },
            Some(Err(error)) => rsx! { ErrorAlert { error } },
            Some(Ok(None)) => rsx! { BotMissing { guild_id } },
            Some(Ok(Some(data))) => rsx! { OverviewStats { guild_id, data } },
        }
    }
}

#[component]
fn BotMissing(guild_id: u64) -> Element {
    rsx! {
        div {
            class: "card bg-base-200 p-6 flex flex-col gap-4 items-start",
            p { class: "text-lg font-semibold", "{SITE_NAME} isn't in this server yet" }
            p { class: "opacity-70", "Add the bot to start configuring moderation for this server." }
            a {
                class: "btn btn-primary",
                href: "/api/bot/invite?guild_id={guild_id}",
                "Add {SITE_NAME}"
            }
        }
    }
}

fn count(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

#[component]
fn OverviewStats(guild_id: u64, data: GuildOverviewDto) -> Element {
    let plan = if data.premium {
        data.plan_name.clone().unwrap_or_else(|| "Premium".to_string())
    } else {
        "Free".to_string()
    };

    rsx! {
        div {
            class: "grid grid-cols-2 lg:grid-cols-3 gap-4",
            StatCard { label: "Members", value: count(data.member_count) }
            StatCard { label: "Plan", value: plan }
            StatCard { label: "Open tickets", value: count(data.open_tickets) }
            StatCard { label: "Pending verifications", value: count(data.pending_verifications) }
            StatCard { label: "Sanctions (7 days)", value: count(data.sanctions_last_week) }
            StatCard { label: "Raids blocked", value: count(data.raids_blocked) }
        }
        h2 { class: "text-xl font-semibold mt-8 mb-4", "Quick setup" }
        div {
            class: "grid grid-cols-1 md:grid-cols-2 gap-4",
            for section in SettingsSection::ALL {
                Link {
                    key: "{section}",
                    to: Route::GuildSettings { guild_id, section },
                    class: "card bg-base-200 p-4 hover:bg-base-300",
                    p { class: "font-semibold", "{section.title()}" }
                    p { class: "text-sm opacity-70", "{section.description()}" }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "stat bg-base-200 rounded-box",
            div { class: "stat-title", "{label}" }
            div { class: "stat-value text-2xl", "{value}" }
        }
    }
}
