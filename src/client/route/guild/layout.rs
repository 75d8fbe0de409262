use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page},
        model::cache::Cache,
        route::servers::GuildIcon,
        router::Route,
    },
    model::{guild::GuildDto, settings::SettingsSection},
};

#[cfg(feature = "web")]
use crate::client::api::guild::get_guilds;

/// Sidebar and access check shared by every page of one guild.
///
/// Guild membership is checked against the cached server list; the server enforces the
/// same rule on every request.
#[component]
pub fn GuildLayout(guild_id: u64) -> Element {
    let mut guilds = use_context::<Signal<Cache<Vec<GuildDto>>>>();

    // Deep links land here without visiting the server list first
    #[cfg(feature = "web")]
    use_effect(move || {
        if !guilds.peek().is_fetched() {
            guilds.set(Cache::Loading);
            spawn(async move {
                guilds.set(get_guilds(false).await.into());
            });
        }
    });

    let cache = guilds.read().clone();

    match cache {
        Cache::NotFetched | Cache::Loading => rsx! { LoadingPage {} },
        Cache::Error(err) => rsx! {
            ErrorPage { status: err.status, message: err.message }
        },
        Cache::Fetched(list) => match list.into_iter().find(|g| g.id == guild_id) {
            None => rsx! {
                ErrorPage {
                    status: 403,
                    message: "You don't have permission to manage this server"
                }
            },
            Some(guild) => rsx! {
                Page {
                    class: "flex flex-col md:flex-row gap-6",
                    GuildSidebar { guild }
                    div {
                        class: "flex-1 min-w-0",
                        Outlet::<Route> {}
                    }
                }
            },
        },
    }
}

#[component]
fn GuildSidebar(guild: GuildDto) -> Element {
    let guild_id = guild.id;

    rsx! {
        aside {
            class: "w-full md:w-60 shrink-0 flex flex-col gap-4",
            div {
                class: "flex items-center gap-3",
                GuildIcon { guild: guild.clone() }
                p { class: "font-semibold truncate", "{guild.name}" }
            }
            ul {
                class: "menu bg-base-200 rounded-box",
                SidebarLink { to: Route::GuildOverview { guild_id }, label: "Overview" }
                li { class: "menu-title", "Settings" }
                for section in SettingsSection::ALL {
                    SidebarLink {
                        key: "{section}",
                        to: Route::GuildSettings { guild_id, section },
                        label: section.title()
                    }
                }
                li { class: "menu-title", "Moderation" }
                SidebarLink { to: Route::Moderation { guild_id }, label: "Sanctions & lists" }
                SidebarLink { to: Route::AuditLog { guild_id }, label: "Audit log" }
                SidebarLink { to: Route::Tickets { guild_id }, label: "Tickets" }
                SidebarLink { to: Route::Verifications { guild_id }, label: "Verifications" }
                li { class: "menu-title", "Premium" }
                SidebarLink { to: Route::Billing { guild_id }, label: "Billing" }
            }
        }
    }
}

#[component]
fn SidebarLink(to: Route, label: &'static str) -> Element {
    rsx! {
        li {
            Link {
                to,
                active_class: "active",
                "{label}"
            }
        }
    }
}
