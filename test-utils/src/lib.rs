//! Sentralyx Dashboard Test Utils
//!
//! Provides shared testing utilities for the dashboard backend. This crate offers a builder
//! for creating test contexts with in-memory SQLite databases and sessions, factories for the
//! locally persisted entities, canned Discord API payloads, and a throw-away HTTP server that
//! stands in for Discord or the external moderation API.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **MockServer**: Local HTTP server recording every request it receives
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::User;
//!
//! #[tokio::test]
//! async fn test_user_operations() -> Result<(), TestError> {
//!     let mut test = TestBuilder::new()
//!         .with_table(User)
//!         .build()
//!         .await?;
//!
//!     let (db, session) = test.db_and_session().await?;
//!     // Perform database and session operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod discord;
pub mod error;
pub mod factory;
pub mod mock;
