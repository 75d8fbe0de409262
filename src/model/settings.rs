//! Guild settings sections and the field schema each settings panel renders.
//!
//! Section values are passed through as JSON objects; the schema below only tells the
//! client which controls to draw and which key each control patches.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// One settings panel's slice of guild configuration.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "kebab-case")]
pub enum SettingsSection {
    AntiRaid,
    AntiScam,
    AutoModeration,
    Ticketing,
    Verification,
    Welcoming,
    Logging,
}

impl SettingsSection {
    pub const ALL: [SettingsSection; 7] = [
        SettingsSection::AntiRaid,
        SettingsSection::AntiScam,
        SettingsSection::AutoModeration,
        SettingsSection::Ticketing,
        SettingsSection::Verification,
        SettingsSection::Welcoming,
        SettingsSection::Logging,
    ];

    /// Path segment used in both dashboard and API routes.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::AntiRaid => "anti-raid",
            Self::AntiScam => "anti-scam",
            Self::AutoModeration => "auto-moderation",
            Self::Ticketing => "ticketing",
            Self::Verification => "verification",
            Self::Welcoming => "welcoming",
            Self::Logging => "logging",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::AntiRaid => "Anti-Raid",
            Self::AntiScam => "Anti-Scam",
            Self::AutoModeration => "Auto Moderation",
            Self::Ticketing => "Ticketing",
            Self::Verification => "Verification",
            Self::Welcoming => "Welcoming",
            Self::Logging => "Logging",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::AntiRaid => "Detect join floods and lock the server down before raiders settle in.",
            Self::AntiScam => "Remove phishing links and sanction accounts spreading known scams.",
            Self::AutoModeration => "Filter spam, invites, mass mentions and banned words.",
            Self::Ticketing => "Let members open private support tickets with your staff.",
            Self::Verification => "Review new members before they get access to the server.",
            Self::Welcoming => "Greet new members and hand out a starting role.",
            Self::Logging => "Choose where moderation and member events are logged.",
        }
    }

    /// Controls rendered by this section's panel, in display order.
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Self::AntiRaid => ANTI_RAID_FIELDS,
            Self::AntiScam => ANTI_SCAM_FIELDS,
            Self::AutoModeration => AUTO_MODERATION_FIELDS,
            Self::Ticketing => TICKETING_FIELDS,
            Self::Verification => VERIFICATION_FIELDS,
            Self::Welcoming => WELCOMING_FIELDS,
            Self::Logging => LOGGING_FIELDS,
        }
    }
}

impl fmt::Display for SettingsSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown settings section '{}'", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for SettingsSection {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.slug() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Kind of control drawn for a field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldKind {
    Toggle,
    Number { min: i64, max: i64 },
    Text,
    LongText,
    /// Text channel picker.
    Channel,
    /// Category channel picker.
    Category,
    Role,
    /// Fixed choice, `(value, label)` pairs.
    Select(&'static [(&'static str, &'static str)]),
}

/// A single configurable value within a section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSpec {
    /// JSON key in the section object.
    pub key: &'static str,
    pub label: &'static str,
    pub help: &'static str,
    pub kind: FieldKind,
}

const fn field(key: &'static str, label: &'static str, help: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        key,
        label,
        help,
        kind,
    }
}

const ENABLED: FieldSpec = field("enabled", "Enabled", "Turn this module on or off.", FieldKind::Toggle);

const SANCTIONS: &[(&str, &str)] = &[
    ("warn", "Warn"),
    ("timeout", "Timeout"),
    ("kick", "Kick"),
    ("ban", "Ban"),
];

const ANTI_RAID_FIELDS: &[FieldSpec] = &[
    ENABLED,
    field("join_threshold", "Join threshold", "Joins within the window that count as a raid.", FieldKind::Number { min: 2, max: 100 }),
    field("join_window_seconds", "Window (seconds)", "Length of the sliding join window.", FieldKind::Number { min: 1, max: 600 }),
    field("action", "Action", "What happens to accounts that joined during a raid.", FieldKind::Select(&[("lockdown", "Lockdown only"), ("kick", "Kick"), ("ban", "Ban")])),
    field("lockdown_minutes", "Lockdown duration (minutes)", "How long the server stays locked after a raid.", FieldKind::Number { min: 0, max: 1440 }),
    field("min_account_age_days", "Minimum account age (days)", "Younger accounts are treated as suspicious.", FieldKind::Number { min: 0, max: 365 }),
    field("alert_channel_id", "Alert channel", "Where raid alerts are posted.", FieldKind::Channel),
];

const ANTI_SCAM_FIELDS: &[FieldSpec] = &[
    ENABLED,
    field("delete_messages", "Delete scam messages", "Remove messages containing known scam links.", FieldKind::Toggle),
    field("action", "Action", "Sanction applied to the author.", FieldKind::Select(SANCTIONS)),
    field("check_compromised_accounts", "Flag compromised accounts", "Use the shared database of compromised accounts.", FieldKind::Toggle),
    field("log_channel_id", "Log channel", "Where removed messages are reported.", FieldKind::Channel),
];

const AUTO_MODERATION_FIELDS: &[FieldSpec] = &[
    ENABLED,
    field("anti_spam", "Anti-spam", "Sanction members sending messages too quickly.", FieldKind::Toggle),
    field("spam_threshold", "Spam threshold", "Messages per 5 seconds before acting.", FieldKind::Number { min: 2, max: 50 }),
    field("anti_invite", "Block invites", "Delete invites to other servers.", FieldKind::Toggle),
    field("mention_limit", "Mention limit", "Maximum mentions in one message, 0 disables the check.", FieldKind::Number { min: 0, max: 50 }),
    field("banned_words", "Banned words", "One word or phrase per line.", FieldKind::LongText),
    field("action", "Action", "Sanction applied on violation.", FieldKind::Select(SANCTIONS)),
    field("exempt_role_id", "Exempt role", "Members with this role are never filtered.", FieldKind::Role),
];

const TICKETING_FIELDS: &[FieldSpec] = &[
    ENABLED,
    field("category_id", "Ticket category", "Category new ticket channels are created in.", FieldKind::Category),
    field("support_role_id", "Support role", "Role that can see and answer tickets.", FieldKind::Role),
    field("transcript_channel_id", "Transcript channel", "Where transcripts of closed tickets are posted.", FieldKind::Channel),
    field("max_open_per_user", "Open tickets per member", "Limit of simultaneously open tickets.", FieldKind::Number { min: 1, max: 10 }),
    field("welcome_message", "Welcome message", "First message posted in a new ticket.", FieldKind::LongText),
];

const VERIFICATION_FIELDS: &[FieldSpec] = &[
    ENABLED,
    field("mode", "Mode", "How new members are verified.", FieldKind::Select(&[("manual", "Manual review"), ("captcha", "Captcha"), ("questions", "Questionnaire")])),
    field("verified_role_id", "Verified role", "Role granted once a member is approved.", FieldKind::Role),
    field("unverified_role_id", "Unverified role", "Role held while waiting for review.", FieldKind::Role),
    field("review_channel_id", "Review channel", "Where staff are notified of new submissions.", FieldKind::Channel),
    field("min_account_age_days", "Minimum account age (days)", "Younger accounts are denied automatically.", FieldKind::Number { min: 0, max: 365 }),
    field("questions", "Questions", "One question per line, asked in questionnaire mode.", FieldKind::LongText),
];

const WELCOMING_FIELDS: &[FieldSpec] = &[
    ENABLED,
    field("channel_id", "Welcome channel", "Where welcome messages are posted.", FieldKind::Channel),
    field("message", "Message", "Supports {user} and {server} placeholders.", FieldKind::LongText),
    field("dm_enabled", "Send as DM", "Also send the message privately.", FieldKind::Toggle),
    field("auto_role_id", "Auto role", "Role given to every new member.", FieldKind::Role),
];

const LOGGING_FIELDS: &[FieldSpec] = &[
    ENABLED,
    field("moderation_channel_id", "Moderation log", "Sanctions and raid events.", FieldKind::Channel),
    field("member_channel_id", "Member log", "Joins, leaves and nickname changes.", FieldKind::Channel),
    field("message_channel_id", "Message log", "Edited and deleted messages.", FieldKind::Channel),
];

/// Reads a field as a boolean, treating anything missing or non-boolean as `false`.
pub fn value_as_bool(settings: &Map<String, Value>, key: &str) -> bool {
    settings.get(key).and_then(Value::as_bool).unwrap_or(false)
}

/// Reads a field as text for an input control.
///
/// Numbers are formatted, `null` and missing keys become an empty string.
pub fn value_as_text(settings: &Map<String, Value>, key: &str) -> String {
    match settings.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Converts the raw input of a control into the JSON value to patch.
///
/// Returns `None` when the input is not valid for the field, e.g. a number out of range.
/// Empty pickers are sent as `null` so the backend clears the setting.
pub fn parse_input(kind: &FieldKind, input: &str) -> Option<Value> {
    match kind {
        FieldKind::Toggle => input.parse::<bool>().ok().map(Value::Bool),
        FieldKind::Number { min, max } => input
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|n| (*min..=*max).contains(n))
            .map(Value::from),
        FieldKind::Text | FieldKind::LongText => Some(Value::String(input.to_string())),
        FieldKind::Channel | FieldKind::Category | FieldKind::Role => {
            if input.is_empty() {
                Some(Value::Null)
            } else {
                Some(Value::String(input.to_string()))
            }
        }
        FieldKind::Select(options) => options
            .iter()
            .find(|(value, _)| *value == input)
            .map(|(value, _)| Value::String(value.to_string())),
    }
}
