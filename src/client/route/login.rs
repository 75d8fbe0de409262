use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaDiscord, Icon};

use crate::client::{
    component::{LoadingPage, Page},
    constant::SITE_NAME,
    model::user::UserState,
    router::Route,
};

/// Message shown for the `error` query parameter set by the OAuth callback.
fn login_error_message(error: &str) -> Option<&'static str> {
    match error {
        "" => None,
        "cancelled" => Some("Login was cancelled on Discord."),
        _ => Some("Login failed, please try again."),
    }
}

#[component]
pub fn Login(error: String) -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let nav = navigator();

    // Handle redirect for authenticated users
    use_effect(move || {
        if user_state.read().is_logged_in() {
            nav.push(Route::Servers {});
        }
    });

    let state = user_state.read();

    rsx! {
        Title { "Login | {SITE_NAME}" }
        if !state.fetched || state.is_logged_in() {
            LoadingPage {}
        } else {
            Page {
                class: "flex flex-col gap-6 items-center justify-center w-full h-full",
                div {
                    class: "flex flex-col items-center gap-2",
                    p {
                        class: "text-3xl font-bold",
                        {SITE_NAME}
                    }
                    p {
                        class: "opacity-70",
                        "Configure moderation, tickets and verification for your servers."
                    }
                }
                if let Some(message) = login_error_message(&error) {
                    div {
                        class: "alert alert-error",
                        "{message}"
                    }
                }
                div {
                    a {
                        href: "/api/auth/login",
                        div {
                            class: "btn btn-outline flex gap-2 items-center",
                            Icon {
                                width: 24,
                                height: 24,
                                icon: FaDiscord
                            }
                            p {
                                "Login with Discord"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(login_error_message(""), None);
        assert_eq!(
            login_error_message("cancelled"),
            Some("Login was cancelled on Discord.")
        );
        assert!(login_error_message("access_denied").is_some());
    }
}
