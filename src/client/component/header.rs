use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaDiscord, Icon};

use crate::client::{constant::SITE_NAME, model::user::UserState, router::Route};

#[component]
pub fn Header() -> Element {
    let user_state = use_context::<Signal<UserState>>();

    let user = user_state.read().user.clone();
    let fetch_completed = user_state.read().fetched;

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Servers {},
                p {
                    class: "md:text-xl font-semibold",
                    {SITE_NAME}
                }
            }
        }
        div {
            class: "flex items-center gap-3",
            if let Some(user) = user {
                div {
                    class: "flex items-center gap-2",
                    img {
                        class: "w-8 h-8 rounded-full",
                        src: user.avatar_url(),
                        alt: "{user.display_name()}",
                    }
                    p { class: "hidden sm:block", "{user.display_name()}" }
                }
                a {
                    href: "/api/auth/logout",
                    div {
                        class: "btn btn-outline",
                        p {
                            "Logout"
                        }
                    }
                }
            } else if fetch_completed {
                a {
                    href: "/api/auth/login",
                    div {
                        class: "btn btn-outline flex gap-2 items-center",
                        Icon {
                            width: 22,
                            height: 22,
                            icon: FaDiscord
                        }
                        p {
                            "Login"
                        }
                    }
                }
            }
        }
    })
}
