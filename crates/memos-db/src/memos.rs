//! Memo repository implementation (read side only).

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{Pool, Postgres, QueryBuilder, Row};

use memos_core::{Error, Memo, MemoFind, MemoRepository, Result, RowStatus};

/// Escape LIKE wildcard characters (`%`, `_`, `\`) in user input.
pub fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// PostgreSQL implementation of MemoRepository.
#[derive(Clone)]
pub struct PgMemoRepository {
    pool: Pool<Postgres>,
}

impl PgMemoRepository {
    /// Create a new PgMemoRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

fn memo_from_row(row: &PgRow) -> Result<Memo> {
    let row_status: String = row.get("row_status");
    Ok(Memo {
        id: row.get("id"),
        creator_id: row.get("creator_id"),
        content: row.get("content"),
        row_status: row_status.parse::<RowStatus>()?,
        created_ts: row.get("created_ts"),
        updated_ts: row.get("updated_ts"),
    })
}

#[async_trait]
impl MemoRepository for PgMemoRepository {
    async fn list_memos(&self, find: &MemoFind) -> Result<Vec<Memo>> {
        let mut query = QueryBuilder::<Postgres>::new(
            "SELECT id, creator_id, content, row_status, created_ts, updated_ts FROM memo WHERE 1 = 1",
        );

        if let Some(creator_id) = find.creator_id {
            query.push(" AND creator_id = ").push_bind(creator_id);
        }
        if let Some(status) = find.row_status {
            query.push(" AND row_status = ").push_bind(status.as_str());
        }
        if let Some(search) = &find.content_search {
            query
                .push(" AND content LIKE ")
                .push_bind(format!("%{}%", escape_like(search)))
                .push(" ESCAPE '\\'");
        }
        query.push(" ORDER BY created_ts DESC, id DESC");

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;

        rows.iter().map(memo_from_row).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("#"), "#");
        assert_eq!(escape_like("50%"), "50\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("c:\\dir"), "c:\\\\dir");
    }
}
