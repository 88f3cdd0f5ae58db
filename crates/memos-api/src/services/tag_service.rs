//! Tag operations on behalf of an authenticated user.
//!
//! The service owns the request rules (empty names, not-found mapping,
//! activity recording) and delegates persistence to the injected store and
//! activity logger.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, trace};

use memos_core::{
    collect_tags, ActivityCreate, ActivityLogger, MemoFind, RowStatus, Store, TagDelete, TagFind,
    TagUpsert, User,
};

use crate::error::ApiError;

const EMPTY_TAG_NAME: &str = "Tag name shouldn't be empty";

/// Create, list, suggest and delete tags for one user at a time.
#[derive(Clone)]
pub struct TagService {
    store: Arc<dyn Store>,
    activities: Arc<dyn ActivityLogger>,
}

impl TagService {
    pub fn new(store: Arc<dyn Store>, activities: Arc<dyn ActivityLogger>) -> Self {
        Self { store, activities }
    }

    /// Upsert `name` for `user` and record a `tag.create` activity.
    ///
    /// Returns the stored tag name. A failure to record the activity fails
    /// the whole call even though the tag row is already written.
    pub async fn create_tag(&self, user: &User, name: String) -> Result<String, ApiError> {
        if name.is_empty() {
            return Err(ApiError::BadRequest(EMPTY_TAG_NAME.to_string()));
        }

        let tag = self
            .store
            .upsert_tag(&TagUpsert {
                name,
                creator_id: user.id,
            })
            .await
            .map_err(ApiError::internal("Failed to upsert tag"))?;

        let activity =
            ActivityCreate::tag_create(&tag).map_err(ApiError::internal("Failed to create activity"))?;
        self.activities
            .create_activity(&activity)
            .await
            .map_err(ApiError::internal("Failed to create activity"))?;

        info!(
            subsystem = "api",
            component = "tag_service",
            op = "create_tag",
            user_id = user.id,
            tag_name = %tag.name,
            "Tag upserted"
        );
        Ok(tag.name)
    }

    /// Names of every tag owned by `user`, in store order.
    pub async fn list_tags(&self, user: &User) -> Result<Vec<String>, ApiError> {
        let tags = self
            .store
            .list_tags(&TagFind { creator_id: user.id })
            .await
            .map_err(ApiError::internal("Failed to find tag list"))?;

        Ok(tags.into_iter().map(|tag| tag.name).collect())
    }

    /// Hashtags used in the user's normal memos that are not registered tags yet.
    ///
    /// The result is deduplicated and sorted ascending.
    pub async fn suggest_tags(&self, user: &User) -> Result<Vec<String>, ApiError> {
        let start = Instant::now();

        let memos = self
            .store
            .list_memos(&MemoFind {
                creator_id: Some(user.id),
                content_search: Some("#".to_string()),
                row_status: Some(RowStatus::Normal),
            })
            .await
            .map_err(ApiError::internal("Failed to find memo list"))?;

        let existing: BTreeSet<String> = self.list_tags(user).await?.into_iter().collect();

        let mut suggestions = BTreeSet::new();
        for memo in &memos {
            trace!(
                subsystem = "api",
                component = "tag_service",
                op = "suggest_tags",
                memo_id = memo.id,
                "Scanning memo for tags"
            );
            suggestions.extend(
                collect_tags(&memo.content)
                    .into_iter()
                    .filter(|tag| !existing.contains(tag)),
            );
        }

        debug!(
            subsystem = "api",
            component = "tag_service",
            op = "suggest_tags",
            user_id = user.id,
            memo_count = memos.len(),
            result_count = suggestions.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Tag suggestions computed"
        );
        Ok(suggestions.into_iter().collect())
    }

    /// Delete the tag `name` owned by `user`.
    pub async fn delete_tag(&self, user: &User, name: String) -> Result<(), ApiError> {
        if name.is_empty() {
            return Err(ApiError::BadRequest(EMPTY_TAG_NAME.to_string()));
        }

        let delete = TagDelete {
            name,
            creator_id: user.id,
        };
        match self.store.delete_tag(&delete).await {
            Ok(()) => {
                info!(
                    subsystem = "api",
                    component = "tag_service",
                    op = "delete_tag",
                    user_id = user.id,
                    tag_name = %delete.name,
                    "Tag deleted"
                );
                Ok(())
            }
            Err(e) if e.is_not_found() => Err(ApiError::NotFound(format!(
                "Tag name not found: {}",
                delete.name
            ))),
            Err(e) => Err(ApiError::internal(format!(
                "Failed to delete tag name: {}",
                delete.name
            ))(e)),
        }
    }
}
