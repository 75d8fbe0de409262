use dioxus::prelude::*;

use crate::client::model::toast::Toasts;

#[component]
pub fn ToastContainer() -> Element {
    let mut toasts = use_context::<Toasts>();

    rsx!(
        div {
            class: "toast toast-end z-50",
            for toast in toasts.items() {
                div {
                    key: "{toast.id}",
                    class: "alert {toast.kind.class()} flex gap-2",
                    span { "{toast.message}" }
                    button {
                        class: "btn btn-xs btn-ghost",
                        onclick: move |_| toasts.dismiss(toast.id),
                        "✕"
                    }
                }
            }
        }
    )
}
