//! Session token lookup.

use async_trait::async_trait;
use sqlx::{Pool, Postgres, Row};

use memos_core::{Error, Result, SessionRepository, User};

/// PostgreSQL implementation of SessionRepository.
#[derive(Clone)]
pub struct PgSessionRepository {
    pool: Pool<Postgres>,
}

impl PgSessionRepository {
    /// Create a new PgSessionRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    async fn find_user_by_token(&self, token: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT u.id, u.username
            FROM user_session s
            JOIN users u ON u.id = s.user_id
            WHERE s.token = $1
              AND (s.expires_ts IS NULL OR s.expires_ts > NOW())
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(row.map(|row| User {
            id: row.get("id"),
            username: row.get("username"),
        }))
    }
}
