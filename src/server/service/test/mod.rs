use crate::server::{
    error::{auth::AuthError, AppError},
    test_support::{app_state, cache_guilds, log_in, TEST_UPSTREAM_TOKEN, UNREACHABLE_URL},
};
use axum::{routing::get, Json, Router};
use serde_json::json;
use test_utils::{builder::TestBuilder, discord, mock::MockServer};

mod auth;
mod guild;
