use dioxus::prelude::*;
use serde_json::{Map, Value};

use crate::{
    client::{
        component::ErrorAlert,
        constant::SITE_NAME,
        model::{error::ApiError, toast::Toasts},
    },
    model::{
        guild::{ChannelDto, RoleDto},
        settings::{parse_input, value_as_bool, value_as_text, FieldKind, FieldSpec, SettingsSection},
    },
};

#[cfg(feature = "web")]
use crate::client::api::{
    guild::{get_channels, get_roles},
    settings::{get_settings, update_settings},
};

/// Roles a setting can point at, highest first. Bot-managed roles and `@everyone` are left out.
fn assignable_roles(guild_id: u64, mut roles: Vec<RoleDto>) -> Vec<RoleDto> {
    let everyone = guild_id.to_string();
    roles.retain(|role| !role.managed && role.id != everyone);
    roles.sort_by(|a, b| b.position.cmp(&a.position));
    roles
}

/// One settings panel: loads the section on mount and patches a single key per change.
#[component]
pub fn GuildSettings(guild_id: u64, section: SettingsSection) -> Element {
    let mut toasts = use_context::<Toasts>();
    let mut settings = use_signal(|| None::<Result<Map<String, Value>, ApiError>>);
    let mut channels = use_signal(Vec::<ChannelDto>::new);
    let mut roles = use_signal(Vec::<RoleDto>::new);
    let mut saving = use_signal(|| None::<&'static str>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(use_reactive!(|(guild_id, section)| async move {
            get_settings(guild_id, section).await
        }));

        use_effect(move || {
            if let Some(result) = &*future.read() {
                settings.set(Some(result.clone()));
            }
        });

        let pickers = use_resource(use_reactive!(|guild_id| async move {
            let channels = get_channels(guild_id).await?;
            let roles = get_roles(guild_id).await?;
            Ok::<_, ApiError>((channels, roles))
        }));

        use_effect(move || match &*pickers.read() {
            Some(Ok((channel_list, role_list))) => {
                channels.set(channel_list.clone());
                roles.set(assignable_roles(guild_id, role_list.clone()));
            }
            Some(Err(err)) => {
                toasts.error(format!("Failed to load channels and roles: {}", err));
            }
            None => (),
        });
    }

    let on_change = use_callback(move |(field, raw): (FieldSpec, String)| {
        let Some(value) = parse_input(&field.kind, &raw) else {
            toasts.error(format!("Invalid value for {}", field.label));
            return;
        };

        // Optimistic update, reverted if the backend rejects it
        let previous = match settings.write().as_mut() {
            Some(Ok(current)) => current.insert(field.key.to_string(), value.clone()),
            _ => return,
        };
        saving.set(Some(field.key));

        #[cfg(feature = "web")]
        spawn(async move {
            let mut changes = Map::new();
            changes.insert(field.key.to_string(), value);

            match update_settings(guild_id, section, &changes).await {
                Ok(()) => toasts.success(format!("{} saved", field.label)),
                Err(err) => {
                    if let Some(Ok(current)) = settings.write().as_mut() {
                        match previous {
                            Some(old) => current.insert(field.key.to_string(), old),
                            None => current.remove(field.key),
                        };
                    }
                    toasts.error(format!("Failed to save {}: {}", field.label, err));
                }
            }
            saving.set(None);
        });
        #[cfg(not(feature = "web"))]
        let _ = previous;
    });

    rsx! {
        Title { "{section.title()} | {SITE_NAME}" }
        div {
            class: "mb-6",
            h1 { class: "text-2xl font-bold", "{section.title()}" }
            p { class: "opacity-70", "{section.description()}" }
        }
        match settings() {
            None => rsx! { span { class: "loading loading-spinner" } },
            Some(Err(error)) => rsx! { ErrorAlert { error } },
            Some(Ok(values)) => rsx! {
                div {
                    class: "card bg-base-200 p-6 flex flex-col gap-6 max-w-2xl",
                    for field in section.fields().iter().copied() {
                        SettingsField {
                            key: "{field.key}",
                            field,
                            values: values.clone(),
                            channels: channels(),
                            roles: roles(),
                            disabled: saving() == Some(field.key),
                            on_change,
                        }
                    }
                }
            },
        }
    }
}

#[component]
fn SettingsField(
    field: FieldSpec,
    values: Map<String, Value>,
    channels: Vec<ChannelDto>,
    roles: Vec<RoleDto>,
    disabled: bool,
    on_change: EventHandler<(FieldSpec, String)>,
) -> Element {
    let text = value_as_text(&values, field.key);

    let control = match field.kind {
        FieldKind::Toggle => rsx! {
            input {
                r#type: "checkbox",
                class: "toggle toggle-primary",
                checked: value_as_bool(&values, field.key),
                disabled,
                onchange: move |evt| on_change.call((field, evt.checked().to_string())),
            }
        },
        FieldKind::Number { min, max } => rsx! {
            input {
                r#type: "number",
                class: "input input-bordered w-40",
                min: "{min}",
                max: "{max}",
                value: "{text}",
                disabled,
                onchange: move |evt| on_change.call((field, evt.value())),
            }
        },
        FieldKind::Text => rsx! {
            input {
                r#type: "text",
                class: "input input-bordered w-full",
                value: "{text}",
                disabled,
                onchange: move |evt| on_change.call((field, evt.value())),
            }
        },
        FieldKind::LongText => rsx! {
            textarea {
                class: "textarea textarea-bordered w-full h-28",
                value: "{text}",
                disabled,
                onchange: move |evt| on_change.call((field, evt.value())),
            }
        },
        FieldKind::Channel | FieldKind::Category => {
            let want_category = field.kind == FieldKind::Category;
            let options: Vec<(String, String)> = channels
                .iter()
                .filter(|c| if want_category { c.is_category() } else { c.is_text() })
                .map(|c| {
                    let name = if want_category { c.name.clone() } else { format!("#{}", c.name) };
                    (c.id.clone(), name)
                })
                .collect();

            rsx! {
                PickerSelect { field, selected: text.clone(), options, disabled, on_change }
            }
        }
        FieldKind::Role => {
            let options: Vec<(String, String)> = roles
                .iter()
                .map(|r| (r.id.clone(), format!("@{}", r.name)))
                .collect();

            rsx! {
                PickerSelect { field, selected: text.clone(), options, disabled, on_change }
            }
        }
        FieldKind::Select(choices) => rsx! {
            select {
                class: "select select-bordered",
                disabled,
                onchange: move |evt| on_change.call((field, evt.value())),
                for (value, label) in choices.iter() {
                    option {
                        value: "{value}",
                        selected: text == *value,
                        "{label}"
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "flex flex-col gap-1",
            label {
                class: "font-semibold",
                "{field.label}"
            }
            {control}
            p { class: "text-sm opacity-60", "{field.help}" }
        }
    }
}

/// Channel or role picker; the empty option clears the setting.
#[component]
fn PickerSelect(
    field: FieldSpec,
    selected: String,
    options: Vec<(String, String)>,
    disabled: bool,
    on_change: EventHandler<(FieldSpec, String)>,
) -> Element {
    rsx! {
        select {
            class: "select select-bordered w-full max-w-xs",
            disabled,
            onchange: move |evt| on_change.call((field, evt.value())),
            option { value: "", selected: selected.is_empty(), "None" }
            for (id, name) in options {
                option {
                    key: "{id}",
                    value: "{id}",
                    selected: selected == id,
                    "{name}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(id: &str, position: i32, managed: bool) -> RoleDto {
        RoleDto {
            id: id.to_string(),
            name: format!("role {}", id),
            color: 0,
            position,
            managed,
        }
    }

    #[test]
    fn assignable_roles_skip_everyone_and_managed() {
        let roles = assignable_roles(
            1,
            vec![role("1", 0, false), role("2", 1, false), role("3", 5, false), role("4", 3, true)],
        );

        let ids: Vec<_> = roles.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "2"]);
    }
}
