use dioxus::prelude::*;

/// Dropdown over a fixed set of `(value, label)` filter options plus an "all" entry.
#[component]
pub fn FilterSelect(
    all_label: &'static str,
    options: &'static [(&'static str, &'static str)],
    value: Option<String>,
    on_change: EventHandler<Option<String>>,
) -> Element {
    let selected = value.unwrap_or_default();

    rsx!(
        select {
            class: "select select-bordered select-sm",
            onchange: move |evt| {
                let value = evt.value();
                on_change.call((!value.is_empty()).then_some(value));
            },
            option { value: "", selected: selected.is_empty(), "{all_label}" }
            for (value, label) in options.iter() {
                option {
                    value: "{value}",
                    selected: selected == *value,
                    "{label}"
                }
            }
        }
    )
}
