use crate::server::{data::user::UserRepository, error::AppError, model::user::UpsertUserParam};
use test_utils::{builder::TestBuilder, factory};

mod find_by_discord_id;
mod upsert;

fn param(discord_id: u64, name: &str) -> UpsertUserParam {
    UpsertUserParam {
        discord_id,
        name: name.to_string(),
        global_name: None,
        avatar: None,
    }
}
