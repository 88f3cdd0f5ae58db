//! Core data models for memos-tags.
//!
//! These types are shared by the store implementations and the HTTP layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Identifier of a user row.
pub type UserId = i32;

// =============================================================================
// USER TYPES
// =============================================================================

/// An authenticated user, as resolved from a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
}

// =============================================================================
// TAG TYPES
// =============================================================================

/// A user-scoped tag. Unique per `(name, creator_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub name: String,
    pub creator_id: UserId,
}

/// Insert-or-update a tag by its natural key.
#[derive(Debug, Clone)]
pub struct TagUpsert {
    pub name: String,
    pub creator_id: UserId,
}

/// Filter for listing tags.
#[derive(Debug, Clone)]
pub struct TagFind {
    pub creator_id: UserId,
}

/// Delete a tag by its natural key.
#[derive(Debug, Clone)]
pub struct TagDelete {
    pub name: String,
    pub creator_id: UserId,
}

// =============================================================================
// MEMO TYPES
// =============================================================================

/// Row status shared by memos. Archived memos are hidden from suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RowStatus {
    Normal,
    Archived,
}

impl RowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowStatus::Normal => "NORMAL",
            RowStatus::Archived => "ARCHIVED",
        }
    }
}

impl fmt::Display for RowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RowStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NORMAL" => Ok(RowStatus::Normal),
            "ARCHIVED" => Ok(RowStatus::Archived),
            other => Err(Error::InvalidInput(format!("Unknown row status: {}", other))),
        }
    }
}

/// A note entry. Tag logic only reads `content`, `creator_id` and `row_status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memo {
    pub id: i32,
    pub creator_id: UserId,
    pub content: String,
    pub row_status: RowStatus,
    pub created_ts: DateTime<Utc>,
    pub updated_ts: DateTime<Utc>,
}

/// Filter for listing memos. `None` fields do not constrain the result.
#[derive(Debug, Clone, Default)]
pub struct MemoFind {
    pub creator_id: Option<UserId>,
    /// Substring the memo content must contain.
    pub content_search: Option<String>,
    pub row_status: Option<RowStatus>,
}

impl MemoFind {
    /// Whether `memo` satisfies every set field of this filter.
    pub fn matches(&self, memo: &Memo) -> bool {
        self.creator_id.map_or(true, |id| memo.creator_id == id)
            && self
                .row_status
                .map_or(true, |status| memo.row_status == status)
            && self
                .content_search
                .as_deref()
                .map_or(true, |needle| memo.content.contains(needle))
    }
}

// =============================================================================
// ACTIVITY TYPES
// =============================================================================

/// Kind of recorded activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityType {
    #[serde(rename = "tag.create")]
    TagCreate,
}

impl ActivityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::TagCreate => "tag.create",
        }
    }
}

impl FromStr for ActivityType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tag.create" => Ok(ActivityType::TagCreate),
            other => Err(Error::InvalidInput(format!(
                "Unknown activity type: {}",
                other
            ))),
        }
    }
}

/// Severity of a recorded activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityLevel {
    Info,
    Warn,
    Error,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Info => "INFO",
            ActivityLevel::Warn => "WARN",
            ActivityLevel::Error => "ERROR",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INFO" => Ok(ActivityLevel::Info),
            "WARN" => Ok(ActivityLevel::Warn),
            "ERROR" => Ok(ActivityLevel::Error),
            other => Err(Error::InvalidInput(format!(
                "Unknown activity level: {}",
                other
            ))),
        }
    }
}

/// A recorded activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: i32,
    pub creator_id: UserId,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub level: ActivityLevel,
    /// JSON-encoded payload, shape depends on `activity_type`.
    pub payload: String,
    pub created_ts: DateTime<Utc>,
}

/// Request to record an activity.
#[derive(Debug, Clone)]
pub struct ActivityCreate {
    pub creator_id: UserId,
    pub activity_type: ActivityType,
    pub level: ActivityLevel,
    pub payload: String,
}

/// Payload of a `tag.create` activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityTagCreatePayload {
    pub tag_name: String,
}

impl ActivityCreate {
    /// Build the `tag.create` activity for a freshly upserted tag.
    pub fn tag_create(tag: &Tag) -> crate::Result<Self> {
        let payload = serde_json::to_string(&ActivityTagCreatePayload {
            tag_name: tag.name.clone(),
        })?;
        Ok(Self {
            creator_id: tag.creator_id,
            activity_type: ActivityType::TagCreate,
            level: ActivityLevel::Info,
            payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memo(creator_id: UserId, content: &str, row_status: RowStatus) -> Memo {
        Memo {
            id: 1,
            creator_id,
            content: content.to_string(),
            row_status,
            created_ts: Utc::now(),
            updated_ts: Utc::now(),
        }
    }

    #[test]
    fn test_row_status_round_trips_through_str() {
        for status in [RowStatus::Normal, RowStatus::Archived] {
            assert_eq!(status.as_str().parse::<RowStatus>().unwrap(), status);
        }
        assert!("DELETED".parse::<RowStatus>().is_err());
    }

    #[test]
    fn test_row_status_serializes_upper_case() {
        let json = serde_json::to_string(&RowStatus::Archived).unwrap();
        assert_eq!(json, "\"ARCHIVED\"");
    }

    #[test]
    fn test_tag_create_payload_uses_camel_case() {
        let tag = Tag {
            name: "rust".to_string(),
            creator_id: 7,
        };
        let create = ActivityCreate::tag_create(&tag).unwrap();
        assert_eq!(create.creator_id, 7);
        assert_eq!(create.activity_type, ActivityType::TagCreate);
        assert_eq!(create.level, ActivityLevel::Info);
        assert_eq!(create.payload, r#"{"tagName":"rust"}"#);
    }

    #[test]
    fn test_activity_type_serializes_dotted() {
        let json = serde_json::to_string(&ActivityType::TagCreate).unwrap();
        assert_eq!(json, "\"tag.create\"");
        assert_eq!(
            "tag.create".parse::<ActivityType>().unwrap(),
            ActivityType::TagCreate
        );
    }

    #[test]
    fn test_activity_level_parse() {
        assert_eq!("WARN".parse::<ActivityLevel>().unwrap(), ActivityLevel::Warn);
        assert!("info".parse::<ActivityLevel>().is_err());
    }

    #[test]
    fn test_memo_find_matches_all_fields() {
        let find = MemoFind {
            creator_id: Some(1),
            content_search: Some("#".to_string()),
            row_status: Some(RowStatus::Normal),
        };

        assert!(find.matches(&memo(1, "hello #world", RowStatus::Normal)));
        assert!(!find.matches(&memo(2, "hello #world", RowStatus::Normal)));
        assert!(!find.matches(&memo(1, "hello world", RowStatus::Normal)));
        assert!(!find.matches(&memo(1, "hello #world", RowStatus::Archived)));
    }

    #[test]
    fn test_memo_find_default_matches_everything() {
        let find = MemoFind::default();
        assert!(find.matches(&memo(3, "", RowStatus::Archived)));
    }
}
