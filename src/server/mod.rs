//! Server-side API backend.
//!
//! The backend authenticates dashboard users through Discord OAuth2 and forwards their
//! requests to the external moderation API. It owns no moderation state; the only
//! local tables are users and sessions.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, access checks and forwarding
//! - **Service Layer** (`service/`) - Upstream proxy client, Discord API, guild access, login
//! - **Data Layer** (`data/`) - User repository
//! - **Model Layer** (`model/`) - Domain models and Discord payloads
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and the auth guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP clients, upstream client)
//! - **Startup** (`startup`) - Initialization of database, sessions and clients
//! - **Router** (`router`) - Axum routes, CORS, tracing and API documentation
//! - **Scheduler** (`scheduler/`) - Expired session cleanup
//!
//! # Request Flow
//!
//! 1. **Router** matches the request; the session layer loads the session
//! 2. **Controller** asks the `AuthGuard` for the session user and guild access
//! 3. **Guild service** answers from the session cache or asks Discord
//! 4. **Upstream client** forwards the request with the bearer token and actor id
//! 5. The external API's status and body are returned unchanged
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;
