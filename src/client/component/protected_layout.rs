use dioxus::prelude::*;

use crate::client::{component::page::LoadingPage, model::user::UserState, router::Route};

/// Renders nested routes only for logged-in users, redirecting everyone else to login.
#[component]
pub fn RequiresLoggedIn() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let nav = navigator();

    let user_logged_in = user_state.read().is_logged_in();
    let fetch_completed = user_state.read().fetched;

    use_effect(use_reactive!(|(user_logged_in, fetch_completed)| {
        if fetch_completed && !user_logged_in {
            nav.push(Route::Login {
                error: String::new(),
            });
        }
    }));

    rsx! {
        // Show loading spinner while user is being fetched
        if !fetch_completed {
            LoadingPage {  }
        } else if user_logged_in {
            Outlet::<Route> {}
        }
        // Logged out: render nothing while redirecting via the use_effect
    }
}
