use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorAlert, FilterSelect, Modal, Pagination, PaginationData, SearchInput, Timestamp},
        constant::SITE_NAME,
        model::{error::ApiError, toast::Toasts},
    },
    model::{
        pagination::{ListQuery, Paginated},
        verification::{
            ReviewVerificationDto, VerificationDecision, VerificationDto, VERIFICATION_STATUSES,
        },
    },
};

#[cfg(feature = "web")]
use crate::client::api::verification::{get_verifications, review_verification};

/// Accounts younger than this get a warning badge.
const YOUNG_ACCOUNT_DAYS: i64 = 7;

#[component]
pub fn Verifications(guild_id: u64) -> Element {
    let mut toasts = use_context::<Toasts>();
    let mut query = use_signal(|| ListQuery::default().status("pending"));
    let mut refetch = use_signal(|| 0u32);
    let mut entries = use_signal(|| None::<Result<Paginated<VerificationDto>, ApiError>>);
    let mut reviewing = use_signal(|| None::<String>);

    let mut deny_target = use_signal(|| None::<VerificationDto>);
    let mut show_deny = use_signal(|| false);
    let mut deny_reason = use_signal(String::new);

    #[cfg(feature = "web")]
    {
        let future = use_resource(use_reactive!(|guild_id| async move {
            let _ = refetch();
            get_verifications(guild_id, &query()).await
        }));

        use_effect(move || {
            if let Some(result) = &*future.read() {
                entries.set(Some(result.clone()));
            }
        });
    }

    let mut review = move |entry: VerificationDto, decision: VerificationDecision, reason: Option<String>| {
        reviewing.set(Some(entry.id.clone()));
        let payload = ReviewVerificationDto { reason };

        #[cfg(feature = "web")]
        spawn(async move {
            match review_verification(guild_id, &entry.id, decision, &payload).await {
                Ok(()) => {
                    let name = entry.user_name.clone().unwrap_or_else(|| entry.user_id.clone());
                    match decision {
                        VerificationDecision::Approve => toasts.success(format!("{} approved", name)),
                        VerificationDecision::Deny => toasts.info(format!("{} denied", name)),
                    }
                    show_deny.set(false);
                    deny_reason.set(String::new());
                    *refetch.write() += 1;
                }
                Err(err) => toasts.error(format!("Failed to review verification: {}", err)),
            }
            reviewing.set(None);
        });
        #[cfg(not(feature = "web"))]
        let _ = (entry, decision, payload);
    };

    rsx! {
        Title { "Verifications | {SITE_NAME}" }
        h1 { class: "text-2xl font-bold mb-6", "Verifications" }
        div {
            class: "flex flex-wrap gap-2 mb-4",
            SearchInput {
                placeholder: "Search by user",
                on_search: move |search: String| {
                    let mut q = query.write();
                    q.search = Some(search);
                    q.page = 0;
                },
            }
            FilterSelect {
                all_label: "All submissions",
                options: VERIFICATION_STATUSES,
                value: query.read().status.clone(),
                on_change: move |status| {
                    let mut q = query.write();
                    q.status = status;
                    q.page = 0;
                },
            }
        }
        match entries() {
            None => rsx! { span { class: "loading loading-spinner" } },
            Some(Err(error)) => rsx! { ErrorAlert { error } },
            Some(Ok(page)) => rsx! {
                if page.items.is_empty() {
                    p { class: "opacity-50 py-8 text-center", "The review queue is empty" }
                } else {
                    div {
                        class: "grid grid-cols-1 lg:grid-cols-2 gap-4",
                        for entry in page.items.iter().cloned() {
                            VerificationCard {
                                key: "{entry.id}",
                                busy: reviewing().as_deref() == Some(entry.id.as_str()),
                                entry,
                                on_approve: move |entry| review(entry, VerificationDecision::Approve, None),
                                on_deny: move |entry| {
                                    deny_target.set(Some(entry));
                                    show_deny.set(true);
                                },
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
        Modal {
            show: show_deny,
            title: "Deny verification".to_string(),
            prevent_close: reviewing().is_some(),
            form {
                class: "flex flex-col gap-3",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    if let Some(entry) = deny_target() {
                        let reason = Some(deny_reason().trim().to_string()).filter(|r| !r.is_empty());
                        review(entry, VerificationDecision::Deny, reason);
                    }
                },
                label { class: "label", span { class: "label-text", "Reason shown to the member (optional)" } }
                textarea {
                    class: "textarea textarea-bordered w-full",
                    value: "{deny_reason}",
                    oninput: move |evt| deny_reason.set(evt.value()),
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        disabled: reviewing().is_some(),
                        onclick: move |_| show_deny.set(false),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-error",
                        disabled: reviewing().is_some(),
                        "Deny"
                    }
                }
            }
        }
    }
}

#[component]
fn VerificationCard(
    entry: VerificationDto,
    busy: bool,
    on_approve: EventHandler<VerificationDto>,
    on_deny: EventHandler<VerificationDto>,
) -> Element {
    let name = entry.user_name.clone().unwrap_or_else(|| entry.user_id.clone());
    let age = entry.account_age_days();
    let approve_entry = entry.clone();
    let deny_entry = entry.clone();

    rsx! {
        div {
            class: "card bg-base-200 p-4 flex flex-col gap-3",
            div {
                class: "flex items-center gap-3",
                div {
                    class: "flex-1",
                    p { class: "font-semibold", "{name}" }
                    p { class: "text-xs opacity-60", "{entry.user_id}" }
                }
                if let Some(days) = age {
                    span {
                        class: if days < YOUNG_ACCOUNT_DAYS { "badge badge-warning" } else { "badge" },
                        "Account {days} days old"
                    }
                }
                span { class: "badge badge-outline", "{entry.status}" }
            }
            p { class: "text-xs opacity-60", "Submitted " Timestamp { value: entry.submitted_at } }
            if !entry.answers.is_empty() {
                dl {
                    class: "flex flex-col gap-2",
                    for answer in entry.answers.iter() {
                        div {
                            dt { class: "text-sm font-semibold", "{answer.question}" }
                            dd { class: "text-sm", "{answer.answer}" }
                        }
                    }
                }
            }
            if let Some(reviewer) = &entry.reviewed_by {
                p {
                    class: "text-sm opacity-70",
                    "Reviewed by {reviewer}"
                    if let Some(reason) = &entry.reason {
                        ": {reason}"
                    }
                }
            }
            if entry.is_pending() {
                div {
                    class: "flex justify-end gap-2",
                    button {
                        class: "btn btn-sm btn-error btn-outline",
                        disabled: busy,
                        onclick: move |_| on_deny.call(deny_entry.clone()),
                        "Deny"
                    }
                    button {
                        class: "btn btn-sm btn-success",
                        disabled: busy,
                        onclick: move |_| on_approve.call(approve_entry.clone()),
                        if busy {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                        }
                        "Approve"
                    }
                }
            }
        }
    }
}
