//! SeaORM entities for the locally persisted dashboard data.
//!
//! Moderation state lives on the external API; the only table owned by the
//! dashboard is the record of Discord users who have logged in.

pub mod prelude;

pub mod user;
