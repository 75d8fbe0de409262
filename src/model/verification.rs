use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Verification statuses offered by the review queue filter, `(value, label)`.
pub const VERIFICATION_STATUSES: &[(&str, &str)] = &[
    ("pending", "Pending"),
    ("approved", "Approved"),
    ("denied", "Denied"),
];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VerificationAnswerDto {
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VerificationDto {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    pub status: String,
    #[serde(default)]
    pub answers: Vec<VerificationAnswerDto>,
    #[serde(default)]
    pub account_created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reviewed_by: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl VerificationDto {
    pub fn is_pending(&self) -> bool {
        self.status == "pending"
    }

    /// Account age in whole days at submission time.
    pub fn account_age_days(&self) -> Option<i64> {
        match (self.account_created_at, self.submitted_at) {
            (Some(created), Some(submitted)) => Some((submitted - created).num_days()),
            _ => None,
        }
    }
}

/// Outcome of a verification review.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum VerificationDecision {
    Approve,
    Deny,
}

impl VerificationDecision {
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Deny => "deny",
        }
    }
}

impl fmt::Display for VerificationDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for VerificationDecision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approve" => Ok(Self::Approve),
            "deny" => Ok(Self::Deny),
            other => Err(format!("unknown decision '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ReviewVerificationDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
