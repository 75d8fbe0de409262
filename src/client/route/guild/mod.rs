pub mod audit_log;
pub mod billing;
pub mod layout;
pub mod moderation;
pub mod overview;
pub mod settings;
pub mod ticket_chat;
pub mod tickets;
pub mod verifications;

pub use audit_log::AuditLog;
pub use billing::Billing;
pub use layout::GuildLayout;
pub use moderation::Moderation;
pub use overview::GuildOverview;
pub use settings::GuildSettings;
pub use ticket_chat::TicketChat;
pub use tickets::Tickets;
pub use verifications::Verifications;
