use crate::server::{
    error::AppError,
    test_support::{app_state, cache_guilds, log_in, UNREACHABLE_URL},
};
use axum::{
    body::{to_bytes, Bytes},
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory, mock::MockServer};

mod auth;
mod proxy;

/// Turns a handler result into a response the way axum would.
fn respond<T: IntoResponse>(result: Result<T, AppError>) -> Response {
    match result {
        Ok(response) => response.into_response(),
        Err(err) => err.into_response(),
    }
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}
