//! # memos-core
//!
//! Core types, traits, and abstractions for memos-tags.
//!
//! This crate provides the data model, the store and activity traits that
//! other crates implement or consume, and the hashtag extractor.
//!
//! ## Logging conventions
//!
//! Events carry `subsystem` (`"api"`, `"db"`), `component` and `op`, plus
//! `user_id`, `tag_name`, `memo_id`, `result_count` or `duration_ms` where
//! they apply.
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Request failed because of a store or activity failure |
//! | WARN  | Fallback applied (bad config value) or request rate limited |
//! | INFO  | Startup, pool ready, tag created or deleted |
//! | DEBUG | Intermediate counts |
//! | TRACE | Per-memo iteration |

pub mod error;
pub mod models;
pub mod tags;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use tags::{collect_tags, find_tag_list_from_memo_content};
pub use traits::*;
