//! Server-side domain models and operation parameters.

pub mod discord;
pub mod user;
