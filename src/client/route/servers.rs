use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaArrowsRotate, Icon};

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        model::{cache::Cache, toast::Toasts},
        router::Route,
    },
    model::guild::GuildDto,
};

#[cfg(feature = "web")]
use crate::client::api::guild::get_guilds;

/// Lists the servers the user can manage.
#[component]
pub fn Servers() -> Element {
    let mut guilds = use_context::<Signal<Cache<Vec<GuildDto>>>>();
    let mut toasts = use_context::<Toasts>();
    let mut refreshing = use_signal(|| false);

    // Fetch on first visit, later visits reuse the shared cache
    #[cfg(feature = "web")]
    use_effect(move || {
        if !guilds.peek().is_fetched() {
            guilds.set(Cache::Loading);
            spawn(async move {
                guilds.set(get_guilds(false).await.into());
            });
        }
    });

    let refresh = move |_| {
        if refreshing() {
            return;
        }
        refreshing.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match get_guilds(true).await {
                Ok(list) => {
                    guilds.set(Cache::Fetched(list));
                    toasts.info("Server list refreshed");
                }
                Err(err) => toasts.error(format!("Failed to refresh servers: {}", err)),
            }
            refreshing.set(false);
        });
    };

    let cache = guilds.read().clone();

    rsx! {
        Title { "Servers | {SITE_NAME}" }
        match cache {
            Cache::NotFetched | Cache::Loading => rsx! { LoadingPage {} },
            Cache::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            Cache::Fetched(list) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full",
                    div {
                        class: "flex justify-between items-center w-full max-w-6xl mb-6",
                        h1 { class: "text-2xl font-bold", "Your servers" }
                        div {
                            class: "flex gap-2",
                            button {
                                class: "btn btn-outline btn-sm",
                                disabled: refreshing(),
                                onclick: refresh,
                                Icon { width: 14, height: 14, icon: FaArrowsRotate }
                                "Refresh"
                            }
                            a {
                                class: "btn btn-primary btn-sm",
                                href: "/api/bot/invite",
                                "Add to a server"
                            }
                        }
                    }
                    if list.is_empty() {
                        div {
                            class: "text-center opacity-70 mt-12",
                            p { "You don't manage any servers." }
                            p {
                                class: "text-sm mt-2",
                                "You need the Manage Server permission to configure a server."
                            }
                        }
                    } else {
                        div {
                            class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4 w-full max-w-6xl",
                            for guild in list {
                                GuildCard { key: "{guild.id}", guild }
                            }
                        }
                    }
                }
            },
        }
    }
}

#[component]
fn GuildCard(guild: GuildDto) -> Element {
    rsx! {
        Link {
            to: Route::GuildOverview { guild_id: guild.id },
            class: "flex items-center gap-4 p-4 border border-neutral rounded-lg hover:bg-base-200",
            GuildIcon { guild: guild.clone() }
            div {
                class: "flex-1",
                h3 { class: "font-semibold", "{guild.name}" }
                if guild.owner {
                    span { class: "badge badge-sm", "Owner" }
                }
            }
        }
    }
}

#[component]
pub fn GuildIcon(guild: GuildDto) -> Element {
    rsx! {
        if let Some(url) = guild.icon_url() {
            img {
                src: "{url}",
                alt: "{guild.name} icon",
                class: "w-12 h-12 rounded-full",
            }
        } else {
            div {
                class: "w-12 h-12 rounded-full bg-neutral flex items-center justify-center font-bold",
                "{guild.initials()}"
            }
        }
    }
}
