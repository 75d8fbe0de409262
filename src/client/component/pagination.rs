use dioxus::prelude::*;

use super::Modal;
use crate::model::pagination::{Paginated, PAGE_SIZES};

/// Display values of one page of a list, independent of the entry type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaginationData {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
    pub first_shown: u64,
    pub last_shown: u64,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T> From<&Paginated<T>> for PaginationData {
    fn from(page: &Paginated<T>) -> Self {
        Self {
            page: page.page,
            limit: page.limit,
            total: page.total,
            total_pages: page.total_pages(),
            first_shown: page.first_shown(),
            last_shown: page.last_shown(),
            has_previous: page.has_previous(),
            has_next: page.has_next(),
        }
    }
}

#[component]
pub fn Pagination(
    data: PaginationData,
    on_page_change: EventHandler<u64>,
    on_limit_change: EventHandler<u64>,
) -> Element {
    let mut show_page_jump = use_signal(|| false);
    let mut jump_page_input = use_signal(String::new);

    rsx!(
        div {
            class: "flex flex-col sm:flex-row justify-between items-center mt-4 gap-4",
            div {
                class: "flex items-center gap-2 text-sm",
                span { "Show" }
                select {
                    class: "select select-bordered select-sm",
                    value: "{data.limit}",
                    onchange: move |evt| {
                        if let Ok(value) = evt.value().parse::<u64>() {
                            on_limit_change.call(value);
                        }
                    },
                    for size in PAGE_SIZES {
                        option {
                            value: "{size}",
                            selected: size == data.limit,
                            "{size}"
                        }
                    }
                }
                span { "entries" }
            }

            div {
                class: "flex flex-col sm:flex-row items-center gap-2 sm:gap-4",
                span {
                    class: "text-xs sm:text-sm opacity-70 whitespace-nowrap",
                    "Showing {data.first_shown} to {data.last_shown} of {data.total}"
                }
                div {
                    class: "join",
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        disabled: !data.has_previous,
                        onclick: move |_| {
                            if data.has_previous {
                                on_page_change.call(data.page - 1);
                            }
                        },
                        "«"
                    }
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        onclick: move |_| {
                            jump_page_input.set((data.page + 1).to_string());
                            show_page_jump.set(true);
                        },
                        "Page {data.page + 1} of {data.total_pages}"
                    }
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        disabled: !data.has_next,
                        onclick: move |_| {
                            if data.has_next {
                                on_page_change.call(data.page + 1);
                            }
                        },
                        "»"
                    }
                }
            }
        }

        Modal {
            show: show_page_jump,
            title: "Jump to Page".to_string(),
            prevent_close: false,
            form {
                onsubmit: move |evt| {
                    evt.prevent_default();
                    if let Ok(target_page) = jump_page_input().parse::<u64>() {
                        if target_page > 0 && target_page <= data.total_pages {
                            on_page_change.call(target_page - 1); // 0-indexed
                            show_page_jump.set(false);
                        }
                    }
                },
                div {
                    class: "form-control w-full flex flex-col gap-3",
                    label {
                        class: "label",
                        span {
                            class: "label-text",
                            "Page number (1-{data.total_pages})"
                        }
                    }
                    input {
                        r#type: "number",
                        class: "input input-bordered w-full",
                        min: "1",
                        max: "{data.total_pages}",
                        value: "{jump_page_input()}",
                        oninput: move |evt| jump_page_input.set(evt.value()),
                        autofocus: true,
                    }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        onclick: move |_| show_page_jump.set(false),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        "Jump"
                    }
                }
            }
        }
    )
}
