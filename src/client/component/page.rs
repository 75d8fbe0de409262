use dioxus::prelude::*;

use crate::client::{model::error::ApiError, router::Route};

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-24 p-4 {class}",
            {children}
        }
    )
}

#[component]
pub fn LoadingPage() -> Element {
    rsx!(
        Page {
            class: "flex items-center justify-center",
            span { class: "loading loading-spinner loading-lg" }
        }
    )
}

#[component]
pub fn ErrorPage(status: u64, message: String) -> Element {
    rsx!(
        Page {
            class: "flex flex-col gap-4 items-center justify-center text-center",
            p { class: "text-5xl font-bold", "{status}" }
            p { class: "text-lg opacity-70", "{message}" }
            Link {
                to: Route::Servers {},
                class: "btn btn-outline",
                "Back to your servers"
            }
        }
    )
}

/// Inline error for a failed section of a page.
#[component]
pub fn ErrorAlert(error: ApiError) -> Element {
    rsx!(
        div {
            class: "alert alert-error",
            span { "{error.message}" }
        }
    )
}
