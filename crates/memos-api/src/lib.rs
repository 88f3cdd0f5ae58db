//! # memos-api
//!
//! HTTP surface for memo tags: create, list, suggest and delete the tags a
//! user owns, with suggestions mined from `#hashtags` in their memos.
//!
//! The binary in `main.rs` wires [`AppState::from_database`] to PostgreSQL;
//! tests build the same router over [`memos_db::test_fixtures::InMemoryStore`].

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod services;
pub mod state;
pub mod telemetry;

pub use auth::CurrentUser;
pub use config::{RateLimitConfig, ServerConfig};
pub use error::ApiError;
pub use response::DataResponse;
pub use router::build_router;
pub use services::TagService;
pub use state::AppState;
