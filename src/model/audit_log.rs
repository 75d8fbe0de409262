use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Actions offered by the audit log filter, `(value, label)`.
pub const AUDIT_ACTIONS: &[(&str, &str)] = &[
    ("settings_update", "Settings changed"),
    ("sanction_create", "Sanction issued"),
    ("sanction_revoke", "Sanction revoked"),
    ("list_add", "List entry added"),
    ("list_remove", "List entry removed"),
    ("ticket_close", "Ticket closed"),
    ("verification_review", "Verification reviewed"),
    ("raid_lockdown", "Raid lockdown"),
    ("subscription_change", "Subscription changed"),
];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AuditLogEntryDto {
    pub id: String,
    pub action: String,
    #[serde(default)]
    pub actor_id: Option<String>,
    #[serde(default)]
    pub actor_name: Option<String>,
    #[serde(default)]
    pub target_id: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub changes: Option<Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl AuditLogEntryDto {
    /// Human readable label for the action, falling back to the raw action name.
    pub fn action_label(&self) -> &str {
        AUDIT_ACTIONS
            .iter()
            .find(|(value, _)| *value == self.action)
            .map(|(_, label)| *label)
            .unwrap_or(&self.action)
    }

    /// Pretty printed change set for the details view.
    pub fn changes_pretty(&self) -> Option<String> {
        self.changes
            .as_ref()
            .filter(|changes| !changes.is_null())
            .and_then(|changes| serde_json::to_string_pretty(changes).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(action: &str, changes: Option<Value>) -> AuditLogEntryDto {
        AuditLogEntryDto {
            id: "1".to_string(),
            action: action.to_string(),
            actor_id: None,
            actor_name: None,
            target_id: None,
            reason: None,
            changes,
            created_at: None,
        }
    }

    #[test]
    fn action_label_falls_back_to_raw_action() {
        assert_eq!(entry("raid_lockdown", None).action_label(), "Raid lockdown");
        assert_eq!(entry("bot_restart", None).action_label(), "bot_restart");
    }

    #[test]
    fn changes_pretty_skips_null() {
        assert!(entry("x", Some(Value::Null)).changes_pretty().is_none());
        assert!(entry("x", Some(serde_json::json!({"enabled": true})))
            .changes_pretty()
            .unwrap()
            .contains("\"enabled\": true"));
    }
}
