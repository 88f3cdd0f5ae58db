//! Tag repository implementation.

use async_trait::async_trait;
use sqlx::{Pool, Postgres, Row};
use tracing::debug;

use memos_core::{Error, Result, Tag, TagDelete, TagFind, TagRepository, TagUpsert};

/// PostgreSQL implementation of TagRepository.
#[derive(Clone)]
pub struct PgTagRepository {
    pool: Pool<Postgres>,
}

impl PgTagRepository {
    /// Create a new PgTagRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PgTagRepository {
    async fn upsert_tag(&self, upsert: &TagUpsert) -> Result<Tag> {
        // The no-op update makes RETURNING yield the existing row on conflict.
        let row = sqlx::query(
            r#"
            INSERT INTO tag (name, creator_id)
            VALUES ($1, $2)
            ON CONFLICT (name, creator_id) DO UPDATE SET name = EXCLUDED.name
            RETURNING name, creator_id
            "#,
        )
        .bind(&upsert.name)
        .bind(upsert.creator_id)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(Tag {
            name: row.get("name"),
            creator_id: row.get("creator_id"),
        })
    }

    async fn list_tags(&self, find: &TagFind) -> Result<Vec<Tag>> {
        let rows = sqlx::query(
            r#"
            SELECT name, creator_id
            FROM tag
            WHERE creator_id = $1
            ORDER BY created_ts, name
            "#,
        )
        .bind(find.creator_id)
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        let tags: Vec<Tag> = rows
            .into_iter()
            .map(|row| Tag {
                name: row.get("name"),
                creator_id: row.get("creator_id"),
            })
            .collect();

        debug!(
            subsystem = "db",
            db_table = "tag",
            user_id = find.creator_id,
            result_count = tags.len(),
            "Listed tags"
        );
        Ok(tags)
    }

    async fn delete_tag(&self, delete: &TagDelete) -> Result<()> {
        let result = sqlx::query("DELETE FROM tag WHERE name = $1 AND creator_id = $2")
            .bind(&delete.name)
            .bind(delete.creator_id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!("tag {}", delete.name)));
        }
        Ok(())
    }
}
