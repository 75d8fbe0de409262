//! Service layer.
//!
//! - `upstream` forwards dashboard requests to the external moderation API
//! - `discord` talks to the Discord REST API with a user's OAuth2 token
//! - `guild` decides which guilds the session user may manage
//! - `auth` runs the Discord OAuth2 login flow

pub mod auth;
pub mod discord;
pub mod guild;
pub mod upstream;

#[cfg(test)]
mod test;
