//! Activity log repository implementation.

use async_trait::async_trait;
use sqlx::{Pool, Postgres, Row};

use memos_core::{
    Activity, ActivityCreate, ActivityLevel, ActivityLogger, ActivityType, Error, Result,
};

/// PostgreSQL implementation of ActivityLogger.
#[derive(Clone)]
pub struct PgActivityRepository {
    pool: Pool<Postgres>,
}

impl PgActivityRepository {
    /// Create a new PgActivityRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityLogger for PgActivityRepository {
    async fn create_activity(&self, create: &ActivityCreate) -> Result<Activity> {
        let row = sqlx::query(
            r#"
            INSERT INTO activity (creator_id, type, level, payload)
            VALUES ($1, $2, $3, $4)
            RETURNING id, creator_id, type, level, payload, created_ts
            "#,
        )
        .bind(create.creator_id)
        .bind(create.activity_type.as_str())
        .bind(create.level.as_str())
        .bind(&create.payload)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;

        let activity_type: String = row.get("type");
        let level: String = row.get("level");
        Ok(Activity {
            id: row.get("id"),
            creator_id: row.get("creator_id"),
            activity_type: activity_type.parse::<ActivityType>()?,
            level: level.parse::<ActivityLevel>()?,
            payload: row.get("payload"),
            created_ts: row.get("created_ts"),
        })
    }
}
