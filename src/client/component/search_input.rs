use dioxus::prelude::*;

/// Text input that reports its value once typing pauses.
///
/// Every keystroke bumps a generation counter; a delayed task only fires `on_search` if
/// no newer keystroke arrived in the meantime.
#[component]
pub fn SearchInput(placeholder: String, on_search: EventHandler<String>) -> Element {
    let mut text = use_signal(String::new);
    let mut generation = use_signal(|| 0u64);

    rsx!(
        input {
            r#type: "search",
            class: "input input-bordered input-sm w-full sm:w-64",
            placeholder: "{placeholder}",
            value: "{text}",
            oninput: move |evt| {
                let value = evt.value();
                text.set(value.clone());
                *generation.write() += 1;

                #[cfg(feature = "web")]
                {
                    use crate::client::constant::SEARCH_DEBOUNCE_MS;

                    let current = generation();
                    spawn(async move {
                        gloo_timers::future::TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
                        if generation() == current {
                            on_search.call(value);
                        }
                    });
                }
                #[cfg(not(feature = "web"))]
                on_search.call(value);
            },
        }
    )
}
