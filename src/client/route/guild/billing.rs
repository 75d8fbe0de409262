use dioxus::prelude::*;

use crate::{
    client::{
        component::{ConfirmationModal, ErrorAlert, Timestamp},
        constant::SITE_NAME,
        model::{error::ApiError, toast::Toasts},
    },
    model::billing::{CheckoutRequestDto, PlanDto, QuotaDto, QuotaItemDto, SubscriptionDto},
};

#[cfg(feature = "web")]
use crate::client::api::billing::{
    cancel_subscription, create_checkout, get_plans, get_quota, get_subscription,
};

/// Progress bar colour for a usage percentage.
fn quota_class(percent: u64) -> &'static str {
    match percent {
        90.. => "progress-error",
        70..=89 => "progress-warning",
        _ => "progress-primary",
    }
}

#[component]
pub fn Billing(guild_id: u64) -> Element {
    let mut toasts = use_context::<Toasts>();
    let mut refetch = use_signal(|| 0u32);
    let mut plans = use_signal(|| None::<Result<Vec<PlanDto>, ApiError>>);
    let mut subscription = use_signal(|| None::<Result<Option<SubscriptionDto>, ApiError>>);
    let mut quota = use_signal(|| None::<Result<QuotaDto, ApiError>>);

    let mut checking_out = use_signal(|| None::<String>);
    let mut show_cancel = use_signal(|| false);
    let mut cancelling = use_signal(|| false);

    #[cfg(feature = "web")]
    {
        let plans_future = use_resource(get_plans);

        use_effect(move || {
            if let Some(result) = &*plans_future.read() {
                plans.set(Some(result.clone()));
            }
        });

        let subscription_future = use_resource(use_reactive!(|guild_id| async move {
            let _ = refetch();
            get_subscription(guild_id).await
        }));

        use_effect(move || {
            if let Some(result) = &*subscription_future.read() {
                subscription.set(Some(result.clone()));
            }
        });

        let quota_future = use_resource(use_reactive!(|guild_id| async move {
            let _ = refetch();
            get_quota(guild_id).await
        }));

        use_effect(move || {
            if let Some(result) = &*quota_future.read() {
                quota.set(Some(result.clone()));
            }
        });
    }

    let on_upgrade = move |plan_id: String| {
        checking_out.set(Some(plan_id.clone()));
        let checkout = CheckoutRequestDto { plan_id };

        #[cfg(feature = "web")]
        spawn(async move {
            match create_checkout(guild_id, &checkout).await {
                Ok(response) => match serde_json::to_string(&response.url) {
                    Ok(url) => {
                        document::eval(&format!("window.location.assign({})", url));
                    }
                    Err(err) => toasts.error(format!("Invalid checkout link: {}", err)),
                },
                Err(err) => toasts.error(format!("Failed to start checkout: {}", err)),
            }
            checking_out.set(None);
        });
        #[cfg(not(feature = "web"))]
        let _ = checkout;
    };

    let on_cancel = move |_: ()| {
        cancelling.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match cancel_subscription(guild_id).await {
                Ok(()) => {
                    toasts.info("Subscription will end with the current period");
                    show_cancel.set(false);
                    *refetch.write() += 1;
                }
                Err(err) => toasts.error(format!("Failed to cancel subscription: {}", err)),
            }
            cancelling.set(false);
        });
    };

    let current = match subscription() {
        Some(Ok(Some(sub))) => Some(sub),
        _ => None,
    };
    let current_plan = current
        .as_ref()
        .filter(|sub| sub.is_active())
        .and_then(|sub| sub.plan_id.clone());

    rsx! {
        Title { "Billing | {SITE_NAME}" }
        h1 { class: "text-2xl font-bold mb-6", "Billing" }

        div {
            class: "grid grid-cols-1 lg:grid-cols-2 gap-4 mb-8",
            div {
                class: "card bg-base-200 p-6",
                h2 { class: "text-lg font-semibold mb-3", "Subscription" }
                match subscription() {
                    None => rsx! { span { class: "loading loading-spinner" } },
                    Some(Err(error)) => rsx! { ErrorAlert { error } },
                    Some(Ok(None)) => rsx! {
                        p { class: "opacity-70", "This server is on the free plan." }
                    },
                    Some(Ok(Some(sub))) => rsx! {
                        SubscriptionSummary {
                            subscription: sub,
                            on_cancel: move |_| show_cancel.set(true),
                        }
                    },
                }
            }
            div {
                class: "card bg-base-200 p-6",
                h2 { class: "text-lg font-semibold mb-3", "Usage" }
                match quota() {
                    None => rsx! { span { class: "loading loading-spinner" } },
                    Some(Err(error)) => rsx! { ErrorAlert { error } },
                    Some(Ok(quota)) => rsx! {
                        if quota.items.is_empty() {
                            p { class: "opacity-50", "No usage recorded yet" }
                        }
                        for item in quota.items {
                            QuotaBar { key: "{item.name}", item }
                        }
                    },
                }
            }
        }

        h2 { class: "text-xl font-semibold mb-4", "Plans" }
        match plans() {
            None => rsx! { span { class: "loading loading-spinner" } },
            Some(Err(error)) => rsx! { ErrorAlert { error } },
            Some(Ok(plans)) => rsx! {
                div {
                    class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                    for plan in plans {
                        PlanCard {
                            key: "{plan.id}",
                            is_current: current_plan.as_deref() == Some(plan.id.as_str()),
                            busy: checking_out().is_some(),
                            plan,
                            on_upgrade,
                        }
                    }
                }
            },
        }

        ConfirmationModal {
            show: show_cancel,
            title: "Cancel subscription".to_string(),
            message: rsx! {
                p {
                    "The subscription stays active until the end of the current billing period. "
                    "After that the server falls back to the free plan."
                }
            },
            confirm_text: "Cancel subscription".to_string(),
            confirm_class: "btn-error".to_string(),
            is_processing: cancelling(),
            processing_text: "Cancelling...".to_string(),
            on_confirm: on_cancel,
        }
    }
}

#[component]
fn SubscriptionSummary(subscription: SubscriptionDto, on_cancel: EventHandler<()>) -> Element {
    let name = subscription
        .plan_name
        .clone()
        .or_else(|| subscription.plan_id.clone())
        .unwrap_or_else(|| "Unknown plan".to_string());

    rsx! {
        div {
            class: "flex flex-col gap-2",
            div {
                class: "flex items-center gap-2",
                span { class: "text-xl font-bold", "{name}" }
                span {
                    class: if subscription.is_active() { "badge badge-success" } else { "badge" },
                    "{subscription.status}"
                }
            }
            if subscription.current_period_end.is_some() {
                p {
                    class: "text-sm opacity-70",
                    if subscription.cancel_at_period_end { "Ends " } else { "Renews " }
                    Timestamp { value: subscription.current_period_end }
                }
            }
            if subscription.is_active() && !subscription.cancel_at_period_end {
                div {
                    button {
                        class: "btn btn-sm btn-outline btn-error",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel subscription"
                    }
                }
            }
        }
    }
}

#[component]
fn QuotaBar(item: QuotaItemDto) -> Element {
    rsx! {
        div {
            class: "mb-3",
            div {
                class: "flex justify-between text-sm mb-1",
                span { "{item.name}" }
                match item.limit {
                    Some(limit) => rsx! { span { "{item.used} / {limit}" } },
                    None => rsx! { span { class: "opacity-60", "{item.used} / Unlimited" } },
                }
            }
            if let Some(percent) = item.percent() {
                progress {
                    class: "progress {quota_class(percent)} w-full",
                    value: "{percent}",
                    max: "100",
                }
            }
        }
    }
}

#[component]
fn PlanCard(plan: PlanDto, is_current: bool, busy: bool, on_upgrade: EventHandler<String>) -> Element {
    let plan_id = plan.id.clone();

    rsx! {
        div {
            class: if plan.highlighted { "card bg-base-200 p-6 border-2 border-primary" } else { "card bg-base-200 p-6" },
            h3 { class: "text-lg font-bold", "{plan.name}" }
            p { class: "text-2xl font-semibold my-2", "{plan.price_label()}" }
            if let Some(description) = &plan.description {
                p { class: "opacity-70 mb-2", "{description}" }
            }
            ul {
                class: "list-disc list-inside text-sm mb-4 flex-1",
                for feature in plan.features.iter() {
                    li { "{feature}" }
                }
            }
            if is_current {
                span { class: "badge badge-primary", "Current plan" }
            } else if !plan.is_free() {
                button {
                    class: "btn btn-primary",
                    disabled: busy,
                    onclick: move |_| on_upgrade.call(plan_id.clone()),
                    "Upgrade"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_class_escalates_with_usage() {
        assert_eq!(quota_class(10), "progress-primary");
        assert_eq!(quota_class(75), "progress-warning");
        assert_eq!(quota_class(100), "progress-error");
    }
}
