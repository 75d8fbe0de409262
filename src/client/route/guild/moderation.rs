use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            ConfirmationModal, ErrorAlert, FilterSelect, Modal, Pagination, PaginationData,
            SearchInput, Timestamp,
        },
        constant::SITE_NAME,
        model::{error::ApiError, toast::Toasts},
    },
    model::{
        moderation::{
            ListEntryDto, ListKind, MemberDto, NewListEntryDto, SanctionDto, SANCTION_KINDS,
        },
        pagination::{ListQuery, Paginated},
    },
};

#[cfg(feature = "web")]
use crate::client::api::moderation::{
    add_list_entry, get_list_entries, get_members, get_sanctions, remove_list_entry,
    revoke_sanction,
};

#[derive(Clone, Copy, PartialEq)]
enum ModerationTab {
    Sanctions,
    List(ListKind),
    Members,
}

impl ModerationTab {
    const ALL: [ModerationTab; 4] = [
        ModerationTab::Sanctions,
        ModerationTab::List(ListKind::Blacklist),
        ModerationTab::List(ListKind::Whitelist),
        ModerationTab::Members,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Sanctions => "Sanctions",
            Self::List(kind) => kind.title(),
            Self::Members => "Members",
        }
    }
}

/// Discord ids are 17 to 20 digit numbers that fit in a `u64`.
fn is_snowflake(value: &str) -> bool {
    (17..=20).contains(&value.len())
        && value.bytes().all(|b| b.is_ascii_digit())
        && value.parse::<u64>().is_ok()
}

#[component]
pub fn Moderation(guild_id: u64) -> Element {
    let mut tab = use_signal(|| ModerationTab::Sanctions);

    rsx! {
        Title { "Moderation | {SITE_NAME}" }
        h1 { class: "text-2xl font-bold mb-6", "Moderation" }
        div {
            role: "tablist",
            class: "tabs tabs-bordered mb-4",
            for entry in ModerationTab::ALL {
                button {
                    role: "tab",
                    class: if tab() == entry { "tab tab-active" } else { "tab" },
                    onclick: move |_| tab.set(entry),
                    "{entry.label()}"
                }
            }
        }
        match tab() {
            ModerationTab::Sanctions => rsx! { SanctionsTab { key: "{guild_id}-sanctions", guild_id } },
            ModerationTab::List(kind) => rsx! { ListTab { key: "{guild_id}-{kind}", guild_id, kind } },
            ModerationTab::Members => rsx! { MembersTab { key: "{guild_id}-members", guild_id } },
        }
    }
}

#[component]
fn SanctionsTab(guild_id: u64) -> Element {
    let mut toasts = use_context::<Toasts>();
    let mut query = use_signal(ListQuery::default);
    let mut refetch = use_signal(|| 0u32);
    let mut sanctions = use_signal(|| None::<Result<Paginated<SanctionDto>, ApiError>>);

    let mut revoke_target = use_signal(|| None::<SanctionDto>);
    let mut show_revoke = use_signal(|| false);
    let mut revoking = use_signal(|| false);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch(); // Read trigger to track changes
            get_sanctions(guild_id, &query()).await
        });

        use_effect(move || {
            if let Some(result) = &*future.read() {
                sanctions.set(Some(result.clone()));
            }
        });
    }

    let on_revoke = move |_| {
        let Some(target) = revoke_target() else {
            return;
        };
        revoking.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match revoke_sanction(guild_id, &target.id).await {
                Ok(()) => {
                    toasts.success("Sanction revoked");
                    *refetch.write() += 1;
                }
                Err(err) => toasts.error(format!("Failed to revoke sanction: {}", err)),
            }
            revoking.set(false);
            show_revoke.set(false);
        });
        #[cfg(not(feature = "web"))]
        let _ = target;
    };

    rsx! {
        div {
            class: "flex flex-wrap gap-2 mb-4",
            SearchInput {
                placeholder: "Search by user or reason",
                on_search: move |search: String| {
                    let mut q = query.write();
                    q.search = Some(search);
                    q.page = 0;
                },
            }
            FilterSelect {
                all_label: "All kinds",
                options: SANCTION_KINDS,
                value: query.read().kind.clone(),
                on_change: move |kind| {
                    let mut q = query.write();
                    q.kind = kind;
                    q.page = 0;
                },
            }
        }
        match sanctions() {
            None => rsx! { span { class: "loading loading-spinner" } },
            Some(Err(error)) => rsx! { ErrorAlert { error } },
            Some(Ok(page)) => rsx! {
                if page.items.is_empty() {
                    p { class: "opacity-50 py-8 text-center", "No sanctions found" }
                } else {
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table table-zebra w-full",
                            thead {
                                tr {
                                    th { "User" }
                                    th { "Kind" }
                                    th { "Reason" }
                                    th { "Moderator" }
                                    th { "Issued" }
                                    th { "Expires" }
                                    th {}
                                }
                            }
                            tbody {
                                for sanction in page.items.iter().cloned() {
                                    SanctionRow {
                                        key: "{sanction.id}",
                                        sanction,
                                        on_revoke: move |target| {
                                            revoke_target.set(Some(target));
                                            show_revoke.set(true);
                                        },
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
        ConfirmationModal {
            show: show_revoke,
            title: "Revoke sanction".to_string(),
            message: rsx! {
                p {
                    "Revoke this "
                    strong { "{revoke_target().map(|s| s.kind).unwrap_or_default()}" }
                    "? The bot will lift it on Discord as well."
                }
            },
            confirm_text: "Revoke".to_string(),
            confirm_class: "btn-error".to_string(),
            is_processing: revoking(),
            processing_text: "Revoking...".to_string(),
            on_confirm: on_revoke,
        }
    }
}

#[component]
fn ListTab(guild_id: u64, kind: ListKind) -> Element {
    let mut toasts = use_context::<Toasts>();
    let mut query = use_signal(ListQuery::default);
    let mut refetch = use_signal(|| 0u32);
    let mut entries = use_signal(|| None::<Result<Paginated<ListEntryDto>, ApiError>>);

    let mut show_add = use_signal(|| false);
    let mut new_user_id = use_signal(String::new);
    let mut new_reason = use_signal(String::new);
    let mut adding = use_signal(|| false);

    let mut remove_target = use_signal(|| None::<ListEntryDto>);
    let mut show_remove = use_signal(|| false);
    let mut removing = use_signal(|| false);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch();
            get_list_entries(guild_id, kind, &query()).await
        });

        use_effect(move || {
            if let Some(result) = &*future.read() {
                entries.set(Some(result.clone()));
            }
        });
    }

    let on_add = move |evt: FormEvent| {
        evt.prevent_default();

        let user_id = new_user_id().trim().to_string();
        if !is_snowflake(&user_id) {
            toasts.error("Enter a valid Discord user id");
            return;
        }
        let reason = Some(new_reason().trim().to_string()).filter(|r| !r.is_empty());
        let entry = NewListEntryDto { user_id, reason };
        adding.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match add_list_entry(guild_id, kind, &entry).await {
                Ok(()) => {
                    toasts.success(format!("Added to the {}", kind));
                    new_user_id.set(String::new());
                    new_reason.set(String::new());
                    show_add.set(false);
                    *refetch.write() += 1;
                }
                Err(err) => toasts.error(format!("Failed to add entry: {}", err)),
            }
            adding.set(false);
        });
        #[cfg(not(feature = "web"))]
        let _ = entry;
    };

    let on_remove = move |_| {
        let Some(target) = remove_target() else {
            return;
        };
        removing.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match remove_list_entry(guild_id, kind, &target.user_id).await {
                Ok(()) => {
                    toasts.success(format!("Removed from the {}", kind));
                    *refetch.write() += 1;
                }
                Err(err) => toasts.error(format!("Failed to remove entry: {}", err)),
            }
            removing.set(false);
            show_remove.set(false);
        });
        #[cfg(not(feature = "web"))]
        let _ = target;
    };

    rsx! {
        div {
            class: "flex flex-wrap justify-between gap-2 mb-4",
            SearchInput {
                placeholder: "Search by user id or name",
                on_search: move |search: String| {
                    let mut q = query.write();
                    q.search = Some(search);
                    q.page = 0;
                },
            }
            button {
                class: "btn btn-primary btn-sm",
                onclick: move |_| show_add.set(true),
                "Add user"
            }
        }
        match entries() {
            None => rsx! { span { class: "loading loading-spinner" } },
            Some(Err(error)) => rsx! { ErrorAlert { error } },
            Some(Ok(page)) => rsx! {
                if page.items.is_empty() {
                    p { class: "opacity-50 py-8 text-center", "The {kind} is empty" }
                } else {
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table table-zebra w-full",
                            thead {
                                tr {
                                    th { "User" }
                                    th { "Reason" }
                                    th { "Added by" }
                                    th { "Added" }
                                    th {}
                                }
                            }
                            tbody {
                                for entry in page.items.iter().cloned() {
                                    ListEntryRow {
                                        key: "{entry.user_id}",
                                        entry,
                                        on_remove: move |target| {
                                            remove_target.set(Some(target));
                                            show_remove.set(true);
                                        },
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
        Modal {
            show: show_add,
            title: format!("Add to {}", kind.title()),
            prevent_close: adding(),
            form {
                class: "flex flex-col gap-3",
                onsubmit: on_add,
                label { class: "label", span { class: "label-text", "Discord user id" } }
                input {
                    class: "input input-bordered w-full",
                    value: "{new_user_id}",
                    placeholder: "80351110224678912",
                    oninput: move |evt| new_user_id.set(evt.value()),
                }
                label { class: "label", span { class: "label-text", "Reason (optional)" } }
                textarea {
                    class: "textarea textarea-bordered w-full",
                    value: "{new_reason}",
                    oninput: move |evt| new_reason.set(evt.value()),
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        disabled: adding(),
                        onclick: move |_| show_add.set(false),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: adding(),
                        "Add"
                    }
                }
            }
        }
        ConfirmationModal {
            show: show_remove,
            title: format!("Remove from {}", kind.title()),
            message: rsx! {
                p { "Remove {remove_target().map(|e| e.user_id).unwrap_or_default()} from the {kind}?" }
            },
            confirm_text: "Remove".to_string(),
            confirm_class: "btn-error".to_string(),
            is_processing: removing(),
            processing_text: "Removing...".to_string(),
            on_confirm: on_remove,
        }
    }
}

#[component]
fn SanctionRow(sanction: SanctionDto, on_revoke: EventHandler<SanctionDto>) -> Element {
    let target = sanction.clone();

    rsx! {
        tr {
            td {
                p { "{sanction.user_name.clone().unwrap_or_default()}" }
                p { class: "text-xs opacity-60", "{sanction.user_id}" }
            }
            td { span { class: "badge", "{sanction.kind}" } }
            td { "{sanction.reason.clone().unwrap_or_default()}" }
            td { "{sanction.moderator_name.clone().unwrap_or_default()}" }
            td { Timestamp { value: sanction.created_at } }
            td { Timestamp { value: sanction.expires_at } }
            td {
                if sanction.active {
                    button {
                        class: "btn btn-xs btn-error btn-outline",
                        onclick: move |_| on_revoke.call(target.clone()),
                        "Revoke"
                    }
                } else {
                    span { class: "text-xs opacity-50", "Inactive" }
                }
            }
        }
    }
}

#[component]
fn ListEntryRow(entry: ListEntryDto, on_remove: EventHandler<ListEntryDto>) -> Element {
    let target = entry.clone();

    rsx! {
        tr {
            td {
                p { "{entry.user_name.clone().unwrap_or_default()}" }
                p { class: "text-xs opacity-60", "{entry.user_id}" }
            }
            td { "{entry.reason.clone().unwrap_or_default()}" }
            td { "{entry.added_by.clone().unwrap_or_default()}" }
            td { Timestamp { value: entry.created_at } }
            td {
                button {
                    class: "btn btn-xs btn-error btn-outline",
                    onclick: move |_| on_remove.call(target.clone()),
                    "Remove"
                }
            }
        }
    }
}

#[component]
fn MembersTab(guild_id: u64) -> Element {
    let mut query = use_signal(ListQuery::default);
    let mut members = use_signal(|| None::<Result<Paginated<MemberDto>, ApiError>>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move { get_members(guild_id, &query()).await });

        use_effect(move || {
            if let Some(result) = &*future.read() {
                members.set(Some(result.clone()));
            }
        });
    }

    rsx! {
        div {
            class: "mb-4",
            SearchInput {
                placeholder: "Search members",
                on_search: move |search: String| {
                    let mut q = query.write();
                    q.search = Some(search);
                    q.page = 0;
                },
            }
        }
        match members() {
            None => rsx! { span { class: "loading loading-spinner" } },
            Some(Err(error)) => rsx! { ErrorAlert { error } },
            Some(Ok(page)) => rsx! {
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table table-zebra w-full",
                        thead {
                            tr {
                                th { "Member" }
                                th { "Joined" }
                                th { "Roles" }
                                th { "Sanctions" }
                            }
                        }
                        tbody {
                            for member in page.items.iter() {
                                tr {
                                    key: "{member.id}",
                                    td {
                                        p { "{member.display_name.clone().unwrap_or_else(|| member.username.clone())}" }
                                        p { class: "text-xs opacity-60", "{member.username} · {member.id}" }
                                    }
                                    td { Timestamp { value: member.joined_at } }
                                    td { "{member.roles.len()}" }
                                    td {
                                        if member.sanction_count > 0 {
                                            span { class: "badge badge-warning", "{member.sanction_count}" }
                                        } else {
                                            "0"
                                        }
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
