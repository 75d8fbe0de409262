//! Throw-away HTTP server for tests.
//!
//! Stands in for Discord or the external moderation API. Every request is recorded
//! before it reaches the supplied router so tests can assert on exactly what the
//! dashboard sent upstream.

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{HeaderMap, Method, StatusCode},
    middleware::{self, Next},
    response::Response,
    Json, Router,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tokio::{net::TcpListener, task::JoinHandle};

use crate::error::TestError;

/// A request received by the mock server.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    /// Returns a header value as a string slice, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Parses the recorded body as JSON.
    pub fn json(&self) -> Option<Value> {
        serde_json::from_slice(&self.body).ok()
    }
}

type Recorded = Arc<Mutex<Vec<RecordedRequest>>>;

/// Local HTTP server bound to an ephemeral port on `127.0.0.1`.
///
/// The server task is aborted when the value is dropped.
pub struct MockServer {
    /// Base URL without trailing slash, e.g. `http://127.0.0.1:40213`.
    pub base_url: String,
    requests: Recorded,
    handle: JoinHandle<()>,
}

impl MockServer {
    /// Starts a server answering with the given router.
    pub async fn start(router: Router) -> Result<Self, TestError> {
        let requests: Recorded = Arc::new(Mutex::new(Vec::new()));

        let app = router.layer(middleware::from_fn_with_state(requests.clone(), record));

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            base_url: format!("http://{}", addr),
            requests,
            handle,
        })
    }

    /// Starts a server answering every request with the same status and JSON body.
    pub async fn respond_with(status: u16, body: Value) -> Result<Self, TestError> {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let router = Router::new().fallback(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        });

        Self::start(router).await
    }

    /// Returns every request received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    /// Returns the most recent request, if any.
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests().pop()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn record(State(requests): State<Recorded>, request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();

    if let Ok(mut requests) = requests.lock() {
        requests.push(RecordedRequest {
            method: parts.method.clone(),
            path: parts.uri.path().to_string(),
            query: parts.uri.query().map(str::to_string),
            headers: parts.headers.clone(),
            body: bytes.to_vec(),
        });
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}
