use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorAlert, FilterSelect, Pagination, PaginationData, SearchInput, Timestamp},
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
    },
    model::{
        pagination::{ListQuery, Paginated},
        ticket::{TicketDto, TICKET_STATUSES},
    },
};

#[cfg(feature = "web")]
use crate::client::api::ticket::get_tickets;

pub fn status_badge_class(status: &str) -> &'static str {
    match status {
        "open" => "badge-success",
        "pending" => "badge-warning",
        _ => "badge-ghost",
    }
}

#[component]
pub fn Tickets(guild_id: u64) -> Element {
    let mut query = use_signal(|| ListQuery::default().status("open"));
    let mut tickets = use_signal(|| None::<Result<Paginated<TicketDto>, ApiError>>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(use_reactive!(|guild_id| async move {
            get_tickets(guild_id, &query()).await
        }));

        use_effect(move || {
            if let Some(result) = &*future.read() {
                tickets.set(Some(result.clone()));
            }
        });
    }

    rsx! {
        Title { "Tickets | {SITE_NAME}" }
        h1 { class: "text-2xl font-bold mb-6", "Tickets" }
        div {
            class: "flex flex-wrap gap-2 mb-4",
            SearchInput {
                placeholder: "Search by member or subject",
                on_search: move |search: String| {
                    let mut q = query.write();
                    q.search = Some(search);
                    q.page = 0;
                },
            }
            FilterSelect {
                all_label: "All tickets",
                options: TICKET_STATUSES,
                value: query.read().status.clone(),
                on_change: move |status| {
                    let mut q = query.write();
                    q.status = status;
                    q.page = 0;
                },
            }
        }
        match tickets() {
            None => rsx! { span { class: "loading loading-spinner" } },
            Some(Err(error)) => rsx! { ErrorAlert { error } },
            Some(Ok(page)) => rsx! {
                if page.items.is_empty() {
                    p { class: "opacity-50 py-8 text-center", "No tickets" }
                } else {
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table table-zebra w-full",
                            thead {
                                tr {
                                    th { "Subject" }
                                    th { "Member" }
                                    th { "Status" }
                                    th { "Assignee" }
                                    th { "Messages" }
                                    th { "Opened" }
                                }
                            }
                            tbody {
                                for ticket in page.items.iter() {
                                    tr {
                                        key: "{ticket.id}",
                                        td {
                                            Link {
                                                class: "link link-hover font-semibold",
                                                to: Route::TicketChat { guild_id, ticket_id: ticket.id.clone() },
                                                "{ticket.subject_or_default()}"
                                            }
                                        }
                                        td { "{ticket.user_name.clone().unwrap_or_else(|| ticket.user_id.clone())}" }
                                        td { span { class: "badge {status_badge_class(&ticket.status)}", "{ticket.status}" } }
                                        td { "{ticket.assignee_name.clone().unwrap_or_default()}" }
                                        td { "{ticket.message_count}" }
                                        td { Timestamp { value: ticket.created_at } }
                                    }
                                }
                            }
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
