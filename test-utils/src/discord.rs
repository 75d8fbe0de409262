//! Canned Discord API payloads.
//!
//! Builds JSON bodies shaped like the responses of Discord's `users/@me` and
//! `users/@me/guilds` endpoints so tests can serve them from a `MockServer`.

use serde_json::{json, Value};

/// Discord permission bit for `ADMINISTRATOR`.
pub const ADMINISTRATOR: u64 = 1 << 3;
/// Discord permission bit for `MANAGE_GUILD`.
pub const MANAGE_GUILD: u64 = 1 << 5;
/// Discord permission bit for `SEND_MESSAGES`.
pub const SEND_MESSAGES: u64 = 1 << 11;

/// Creates a `users/@me` payload.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Unique username
/// - `global_name` - Optional display name
pub fn current_user(user_id: u64, username: &str, global_name: Option<&str>) -> Value {
    json!({
        "id": user_id.to_string(),
        "username": username,
        "global_name": global_name,
        "discriminator": "0",
        "avatar": null,
        "public_flags": 0,
        "flags": 0,
    })
}

/// Creates one entry of a `users/@me/guilds` payload.
///
/// Discord serializes the permission bitfield as a decimal string, which is reproduced
/// here so the parsing path is exercised.
pub fn user_guild(guild_id: u64, name: &str, owner: bool, permissions: u64) -> Value {
    json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": null,
        "owner": owner,
        "permissions": permissions.to_string(),
        "features": [],
    })
}
