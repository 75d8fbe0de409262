use dioxus::prelude::*;

use crate::client::{
    constant::SITE_NAME,
    model::{cache::Cache, toast::Toasts, user::UserState},
    router::Route,
};
use crate::model::guild::GuildDto;

#[cfg(feature = "web")]
use crate::client::api::user::get_user;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
const TAILWIND_JS: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

#[component]
pub fn App() -> Element {
    let mut user_state = use_context_provider(|| Signal::new(UserState::default()));
    use_context_provider(|| Signal::new(Cache::<Vec<GuildDto>>::default()));
    use_context_provider(Toasts::new);

    // Fetch user on first load
    #[cfg(feature = "web")]
    {
        let future = use_resource(get_user);

        use_effect(move || match &*future.read() {
            Some(Ok(user)) => user_state.set(UserState::fetched(user.clone())),
            Some(Err(err)) => {
                tracing::error!("Failed to fetch user: {}", err);
                user_state.set(UserState::fetched(None));
            }
            None => (),
        });
    }

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Dashboard for the Sentralyx Discord moderation bot"
        }
        document::Link { rel: "stylesheet", href: DAISYUI_CSS }
        document::Script { src: TAILWIND_JS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
