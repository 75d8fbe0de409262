//! Database repository layer.
//!
//! Only the dashboard's own users are stored locally; all moderation state lives in
//! the external API.

pub mod user;

#[cfg(test)]
mod test;
