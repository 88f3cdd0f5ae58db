//! Core traits for memos-tags abstractions.
//!
//! These traits define the interfaces that concrete stores must satisfy,
//! enabling pluggable backends and testability.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::*;

// =============================================================================
// STORE TRAITS
// =============================================================================

/// Repository for user-scoped tags.
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Insert the tag, or keep the existing row for the same `(name, creator_id)`.
    async fn upsert_tag(&self, upsert: &TagUpsert) -> Result<Tag>;

    /// List the tags matching `find`, in insertion order.
    async fn list_tags(&self, find: &TagFind) -> Result<Vec<Tag>>;

    /// Delete a tag by `(name, creator_id)`.
    ///
    /// Returns [`Error::NotFound`](crate::Error::NotFound) when no row matched.
    async fn delete_tag(&self, delete: &TagDelete) -> Result<()>;
}

/// Read access to memos.
#[async_trait]
pub trait MemoRepository: Send + Sync {
    /// List memos matching every set field of `find`.
    async fn list_memos(&self, find: &MemoFind) -> Result<Vec<Memo>>;
}

/// The persistence interface consumed by the tag service.
pub trait Store: TagRepository + MemoRepository {}

impl<T> Store for T where T: TagRepository + MemoRepository {}

// =============================================================================
// ACTIVITY TRAITS
// =============================================================================

/// Records user activities.
#[async_trait]
pub trait ActivityLogger: Send + Sync {
    /// Persist an activity and return the stored row.
    async fn create_activity(&self, create: &ActivityCreate) -> Result<Activity>;
}

// =============================================================================
// SESSION TRAITS
// =============================================================================

/// Resolves session tokens to users.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Return the user owning `token`, or `None` for unknown or expired tokens.
    async fn find_user_by_token(&self, token: &str) -> Result<Option<User>>;
}
