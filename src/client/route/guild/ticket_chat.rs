use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorAlert, Markdown, Modal, Timestamp},
        constant::SITE_NAME,
        model::{error::ApiError, toast::Toasts},
        route::guild::tickets::status_badge_class,
        router::Route,
    },
    model::ticket::{CloseTicketDto, NewTicketMessageDto, TicketDto, TicketMessageDto},
};

#[cfg(feature = "web")]
use crate::client::api::ticket::{close_ticket, get_ticket, get_ticket_messages, post_ticket_message};

fn ticket_is_closed(ticket: &Option<Result<TicketDto, ApiError>>) -> bool {
    ticket
        .as_ref()
        .and_then(|t| t.as_ref().ok())
        .is_some_and(TicketDto::is_closed)
}

/// Support chat for a single ticket.
///
/// The ticket and its messages are re-fetched on a fixed interval until the ticket is
/// closed, wherever it was closed from.
#[component]
pub fn TicketChat(guild_id: u64, ticket_id: String) -> Element {
    let mut toasts = use_context::<Toasts>();
    let mut ticket = use_signal(|| None::<Result<TicketDto, ApiError>>);
    let mut messages = use_signal(|| None::<Result<Vec<TicketMessageDto>, ApiError>>);
    let mut refetch = use_signal(|| 0u32);

    let mut draft = use_signal(String::new);
    let mut sending = use_signal(|| false);

    let mut show_close = use_signal(|| false);
    let mut close_reason = use_signal(String::new);
    let mut closing = use_signal(|| false);

    let is_closed = ticket_is_closed(&ticket.read());

    #[cfg(feature = "web")]
    {
        let ticket_future = {
            let ticket_id = ticket_id.clone();
            use_resource(use_reactive!(|(guild_id, ticket_id)| async move {
            let _ = refetch();
            get_ticket(guild_id, &ticket_id).await
        }))
        };

        use_effect(move || {
            if let Some(result) = &*ticket_future.read() {
                ticket.set(Some(result.clone()));
            }
        });

        let messages_future = {
            let ticket_id = ticket_id.clone();
            use_resource(use_reactive!(|(guild_id, ticket_id)| async move {
            let _ = refetch();
            get_ticket_messages(guild_id, &ticket_id).await
        }))
        };

        use_effect(move || {
            if let Some(result) = &*messages_future.read() {
                messages.set(Some(result.clone()));
            }
        });

        use_future(move || async move {
            use crate::client::constant::TICKET_POLL_INTERVAL_MS;

            loop {
                gloo_timers::future::TimeoutFuture::new(TICKET_POLL_INTERVAL_MS).await;
                // Reloads the ticket too, so a close from elsewhere stops the polling
                if !ticket_is_closed(&ticket.peek()) {
                    *refetch.write() += 1;
                }
            }
        });
    }

    let send_ticket_id = ticket_id.clone();
    let on_send = move |evt: FormEvent| {
        evt.prevent_default();

        let content = draft().trim().to_string();
        if content.is_empty() || sending() {
            return;
        }
        sending.set(true);

        let message = NewTicketMessageDto { content };
        let ticket_id = send_ticket_id.clone();

        #[cfg(feature = "web")]
        spawn(async move {
            match post_ticket_message(guild_id, &ticket_id, &message).await {
                Ok(()) => {
                    draft.set(String::new());
                    *refetch.write() += 1;
                }
                Err(err) => toasts.error(format!("Failed to send message: {}", err)),
            }
            sending.set(false);
        });
        #[cfg(not(feature = "web"))]
        let _ = (message, ticket_id);
    };

    let close_ticket_id = ticket_id.clone();
    let on_close = move |evt: FormEvent| {
        evt.prevent_default();
        closing.set(true);

        let reason = Some(close_reason().trim().to_string()).filter(|r| !r.is_empty());
        let payload = CloseTicketDto { reason };
        let ticket_id = close_ticket_id.clone();

        #[cfg(feature = "web")]
        spawn(async move {
            match close_ticket(guild_id, &ticket_id, &payload).await {
                Ok(()) => {
                    toasts.success("Ticket closed");
                    show_close.set(false);
                    *refetch.write() += 1;
                }
                Err(err) => toasts.error(format!("Failed to close ticket: {}", err)),
            }
            closing.set(false);
        });
        #[cfg(not(feature = "web"))]
        let _ = (payload, ticket_id);
    };

    rsx! {
        Title { "Ticket | {SITE_NAME}" }
        Link {
            class: "link link-hover text-sm opacity-70",
            to: Route::Tickets { guild_id },
            "← All tickets"
        }
        match ticket() {
            None => rsx! { div { span { class: "loading loading-spinner" } } },
            Some(Err(error)) => rsx! { ErrorAlert { error } },
            Some(Ok(data)) => rsx! {
                div {
                    class: "flex flex-wrap items-center gap-3 my-4",
                    h1 { class: "text-2xl font-bold", "{data.subject_or_default()}" }
                    span { class: "badge {status_badge_class(&data.status)}", "{data.status}" }
                    span { class: "flex-1" }
                    if !data.is_closed() {
                        button {
                            class: "btn btn-sm btn-error btn-outline",
                            onclick: move |_| show_close.set(true),
                            "Close ticket"
                        }
                    }
                }
                p {
                    class: "text-sm opacity-70 mb-4",
                    "Opened by {data.user_name.clone().unwrap_or_else(|| data.user_id.clone())} "
                    Timestamp { value: data.created_at }
                }
            },
        }
        div {
            class: "card bg-base-200 p-4 flex flex-col gap-3 max-h-[60vh] overflow-y-auto",
            match messages() {
                None => rsx! { span { class: "loading loading-spinner" } },
                Some(Err(error)) => rsx! { ErrorAlert { error } },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "opacity-50 text-center", "No messages yet" }
                },
                Some(Ok(list)) => rsx! {
                    for message in list {
                        ChatMessage { key: "{message.id}", message }
                    }
                },
            }
        }
        if is_closed {
            p { class: "mt-4 opacity-60", "This ticket is closed." }
        } else {
            form {
                class: "flex flex-col gap-2 mt-4",
                onsubmit: on_send,
                textarea {
                    class: "textarea textarea-bordered w-full",
                    placeholder: "Reply as staff, Markdown supported",
                    value: "{draft}",
                    disabled: sending(),
                    oninput: move |evt| draft.set(evt.value()),
                }
                div {
                    class: "flex justify-end",
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: sending() || draft().trim().is_empty(),
                        if sending() {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                        }
                        "Send"
                    }
                }
            }
        }
        Modal {
            show: show_close,
            title: "Close ticket".to_string(),
            prevent_close: closing(),
            form {
                class: "flex flex-col gap-3",
                onsubmit: on_close,
                label { class: "label", span { class: "label-text", "Reason (optional)" } }
                textarea {
                    class: "textarea textarea-bordered w-full",
                    value: "{close_reason}",
                    oninput: move |evt| close_reason.set(evt.value()),
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        disabled: closing(),
                        onclick: move |_| show_close.set(false),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-error",
                        disabled: closing(),
                        "Close ticket"
                    }
                }
            }
        }
    }
}

#[component]
fn ChatMessage(message: TicketMessageDto) -> Element {
    let author = message
        .author_name
        .clone()
        .unwrap_or_else(|| message.author_id.clone());
    let align = if message.staff { "items-end" } else { "items-start" };
    let bubble = if message.staff { "bg-primary text-primary-content" } else { "bg-base-100" };

    rsx! {
        div {
            class: "flex flex-col {align}",
            div {
                class: "text-xs opacity-60 mb-1 flex gap-2",
                span { "{author}" }
                if message.staff {
                    span { class: "badge badge-xs", "Staff" }
                }
                Timestamp { value: message.created_at }
            }
            div {
                class: "rounded-box px-3 py-2 max-w-[80%] {bubble}",
                Markdown { content: message.content.clone() }
            }
        }
    }
}
