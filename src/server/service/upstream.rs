//! Forwarding of dashboard requests to the external moderation API.
//!
//! Requests carry the static bearer token and the id of the acting user. Whatever the
//! external API answers (status, content type and body) goes back to the browser
//! unchanged; only transport failures become errors.

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;

use crate::{model::pagination::ListQuery, server::error::AppError};

/// Header naming the Discord user on whose behalf a request is made.
pub const ACTOR_ID_HEADER: &str = "X-Actor-Id";

#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

/// One request to forward.
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub method: Method,
    /// Path below the API base URL, starting with `/`.
    pub path: String,
    pub actor_id: u64,
    pub query: Option<ListQuery>,
    pub body: Option<Bytes>,
}

impl UpstreamRequest {
    pub fn new(method: Method, path: impl Into<String>, actor_id: u64) -> Self {
        Self {
            method,
            path: path.into(),
            actor_id,
            query: None,
            body: None,
        }
    }

    pub fn get(path: impl Into<String>, actor_id: u64) -> Self {
        Self::new(Method::GET, path, actor_id)
    }

    /// Attaches a list query; it is normalised before sending.
    pub fn with_query(mut self, query: ListQuery) -> Self {
        self.query = Some(query.normalized());
        self
    }

    /// Attaches a JSON body. An empty body is treated as no body.
    pub fn with_body(mut self, body: Bytes) -> Self {
        self.body = if body.is_empty() { None } else { Some(body) };
        self
    }
}

/// The external API's answer, relayed as-is.
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

impl IntoResponse for UpstreamResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;

        if let Some(content_type) = self.content_type {
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, content_type);
        }

        response
    }
}

impl UpstreamClient {
    pub fn new(http: reqwest::Client, base_url: String, token: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a request, query string included.
    fn url_for(&self, request: &UpstreamRequest) -> String {
        let mut url = format!("{}{}", self.base_url, request.path);

        if let Some(query) = &request.query {
            url.push('?');
            url.push_str(&query.to_query_string());
        }

        url
    }

    /// Sends the request and captures the response.
    ///
    /// # Returns
    /// - `Ok(UpstreamResponse)` - Any HTTP answer, including 4xx and 5xx
    /// - `Err(AppError::ReqwestErr)` - Connection, TLS or body read failure
    pub async fn forward(&self, request: UpstreamRequest) -> Result<UpstreamResponse, AppError> {
        let url = self.url_for(&request);

        tracing::debug!(
            "Forwarding {} {} for user {}",
            request.method,
            request.path,
            request.actor_id
        );

        let mut builder = self
            .http
            .request(request.method.clone(), &url)
            .bearer_auth(&self.token)
            .header(ACTOR_ID_HEADER, request.actor_id.to_string())
            .header(header::ACCEPT, "application/json");

        if let Some(body) = request.body {
            builder = builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = builder.send().await?;

        let status = response.status();
        let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
        let body = response.bytes().await?;

        if status.is_server_error() {
            tracing::warn!(
                "External API answered {} for {} {}",
                status,
                request.method,
                request.path
            );
        }

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}
