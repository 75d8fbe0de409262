//! Data transfer objects shared by the client and the server.
//!
//! Most of these mirror responses of the external moderation API. Fields the UI reads
//! are optional or defaulted so a partial payload still renders.

pub mod api;
pub mod audit_log;
pub mod billing;
pub mod guild;
pub mod moderation;
pub mod pagination;
pub mod settings;
pub mod snowflake;
pub mod ticket;
pub mod user;
pub mod verification;
