use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorAlert, FilterSelect, Pagination, PaginationData, SearchInput, Timestamp},
        constant::SITE_NAME,
        model::error::ApiError,
    },
    model::{
        audit_log::{AuditLogEntryDto, AUDIT_ACTIONS},
        pagination::{ListQuery, Paginated},
    },
};

#[cfg(feature = "web")]
use crate::client::api::audit_log::get_audit_logs;

#[component]
pub fn AuditLog(guild_id: u64) -> Element {
    let mut query = use_signal(ListQuery::default);
    let mut entries = use_signal(|| None::<Result<Paginated<AuditLogEntryDto>, ApiError>>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(use_reactive!(|guild_id| async move {
            get_audit_logs(guild_id, &query()).await
        }));

        use_effect(move || {
            if let Some(result) = &*future.read() {
                entries.set(Some(result.clone()));
            }
        });
    }

    rsx! {
        Title { "Audit log | {SITE_NAME}" }
        h1 { class: "text-2xl font-bold mb-6", "Audit log" }
        div {
            class: "flex flex-wrap gap-2 mb-4",
            SearchInput {
                placeholder: "Search by actor, target or reason",
                on_search: move |search: String| {
                    let mut q = query.write();
                    q.search = Some(search);
                    q.page = 0;
                },
            }
            FilterSelect {
                all_label: "All actions",
                options: AUDIT_ACTIONS,
                value: query.read().action.clone(),
                on_change: move |action| {
                    let mut q = query.write();
                    q.action = action;
                    q.page = 0;
                },
            }
        }
        match entries() {
            None => rsx! { span { class: "loading loading-spinner" } },
            Some(Err(error)) => rsx! { ErrorAlert { error } },
            Some(Ok(page)) => rsx! {
                if page.items.is_empty() {
                    p { class: "opacity-50 py-8 text-center", "Nothing has been logged yet" }
                } else {
                    div {
                        class: "flex flex-col gap-2",
                        for entry in page.items.iter().cloned() {
                            AuditLogRow { key: "{entry.id}", entry }
                        }
                    }
                }
                Pagination {
                    data: PaginationData::from(&page),
                    on_page_change: move |p| query.write().page = p,
                    on_limit_change: move |limit| {
                        let mut q = query.write();
                        q.limit = limit;
                        q.page = 0;
                    },
                }
            },
        }
    }
}

#[component]
fn AuditLogRow(entry: AuditLogEntryDto) -> Element {
    let mut expanded = use_signal(|| false);
    let changes = entry.changes_pretty();
    let actor = entry
        .actor_name
        .clone()
        .or_else(|| entry.actor_id.clone())
        .unwrap_or_else(|| "System".to_string());

    rsx! {
        div {
            class: "card bg-base-200 p-3",
            div {
                class: "flex flex-wrap items-center gap-3",
                span { class: "badge badge-outline", "{entry.action_label()}" }
                span { class: "font-semibold", "{actor}" }
                if let Some(target) = &entry.target_id {
                    span { class: "text-sm opacity-70", "→ {target}" }
                }
                span { class: "flex-1" }
                span { class: "text-sm opacity-60", Timestamp { value: entry.created_at } }
                if changes.is_some() {
                    button {
                        class: "btn btn-xs btn-ghost",
                        onclick: move |_| expanded.set(!expanded()),
                        if expanded() { "Hide changes" } else { "Show changes" }
                    }
                }
            }
            if let Some(reason) = &entry.reason {
                p { class: "text-sm mt-1", "{reason}" }
            }
            if expanded() {
                if let Some(changes) = &changes {
                    pre { class: "text-xs mt-2 p-2 bg-base-300 rounded overflow-x-auto", "{changes}" }
                }
            }
        }
    }
}
