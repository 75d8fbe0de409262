use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ticket statuses offered by the ticket filter, `(value, label)`.
pub const TICKET_STATUSES: &[(&str, &str)] = &[
    ("open", "Open"),
    ("pending", "Awaiting member"),
    ("closed", "Closed"),
];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TicketDto {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    pub status: String,
    #[serde(default)]
    pub assignee_name: Option<String>,
    #[serde(default)]
    pub message_count: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
}

impl TicketDto {
    pub fn is_closed(&self) -> bool {
        self.status == "closed"
    }

    pub fn subject_or_default(&self) -> &str {
        self.subject.as_deref().unwrap_or("No subject")
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TicketMessageDto {
    pub id: String,
    pub author_id: String,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub content: String,
    /// Sent from the dashboard or by a member holding the support role.
    #[serde(default)]
    pub staff: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct NewTicketMessageDto {
    pub content: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CloseTicketDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_helpers() {
        let ticket: TicketDto =
            serde_json::from_str(r#"{"id":"t1","user_id":"9","status":"closed"}"#).unwrap();

        assert!(ticket.is_closed());
        assert_eq!(ticket.subject_or_default(), "No subject");
        assert_eq!(ticket.message_count, 0);
    }

    #[test]
    fn message_parses_timestamps() {
        let message: TicketMessageDto = serde_json::from_str(
            r#"{"id":"m1","author_id":"9","content":"hi","created_at":"2026-03-01T12:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(message.created_at.unwrap().to_rfc3339(), "2026-03-01T12:00:00+00:00");
        assert!(!message.staff);
    }
}
