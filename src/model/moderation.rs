use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sanction kinds offered by the sanctions filter, `(value, label)`.
pub const SANCTION_KINDS: &[(&str, &str)] = &[
    ("warn", "Warnings"),
    ("timeout", "Timeouts"),
    ("kick", "Kicks"),
    ("ban", "Bans"),
];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SanctionDto {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub moderator_id: Option<String>,
    #[serde(default)]
    pub moderator_name: Option<String>,
    pub kind: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub active: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MemberDto {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub joined_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub sanction_count: u64,
}

/// Which of the two user lists an entry belongs to.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// Users banned on sight when they join.
    Blacklist,
    /// Users exempt from automated moderation.
    Whitelist,
}

impl ListKind {
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Blacklist => "blacklist",
            Self::Whitelist => "whitelist",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Blacklist => "Blacklist",
            Self::Whitelist => "Whitelist",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ListKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blacklist" => Ok(Self::Blacklist),
            "whitelist" => Ok(Self::Whitelist),
            other => Err(format!("unknown list '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ListEntryDto {
    pub user_id: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub added_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct NewListEntryDto {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanction_defaults_optional_fields() {
        let sanction: SanctionDto =
            serde_json::from_str(r#"{"id":"s1","user_id":"42","kind":"ban"}"#).unwrap();

        assert_eq!(sanction.kind, "ban");
        assert!(!sanction.active);
        assert!(sanction.reason.is_none());
        assert!(sanction.created_at.is_none());
    }

    #[test]
    fn list_kind_parses_path_segments() {
        assert_eq!("blacklist".parse::<ListKind>(), Ok(ListKind::Blacklist));
        assert_eq!("whitelist".parse::<ListKind>(), Ok(ListKind::Whitelist));
        assert!("greylist".parse::<ListKind>().is_err());
    }

    #[test]
    fn new_entry_omits_missing_reason() {
        let body = serde_json::to_string(&NewListEntryDto {
            user_id: "42".to_string(),
            reason: None,
        })
        .unwrap();

        assert_eq!(body, r#"{"user_id":"42"}"#);
    }
}
