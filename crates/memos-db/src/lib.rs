//! # memos-db
//!
//! PostgreSQL store for memos-tags.
//!
//! This crate provides:
//! - Connection pool management
//! - Repository implementations for tags, memos, activities and sessions
//! - Schema migrations (behind the `migrations` feature)
//! - An in-memory store for tests ([`test_fixtures::InMemoryStore`])
//!
//! ## Example
//!
//! ```rust,ignore
//! use memos_db::{Database, TagRepository, TagFind};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("postgres://localhost/memos").await?;
//!     let tags = db.tags.list_tags(&TagFind { creator_id: 1 }).await?;
//!     println!("{} tags", tags.len());
//!     Ok(())
//! }
//! ```
use async_trait::async_trait;

pub mod activities;
pub mod memos;
pub mod pool;
pub mod sessions;
pub mod tags;

// Always compiled so integration tests (in tests/) and downstream crates can use it
pub mod test_fixtures;

// Re-export core types
pub use memos_core::*;

pub use activities::PgActivityRepository;
pub use memos::{escape_like, PgMemoRepository};
pub use pool::{create_pool, create_pool_with_config, PoolConfig};
pub use sessions::PgSessionRepository;
pub use tags::PgTagRepository;

/// Combined database context with all repositories.
#[derive(Clone)]
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::Pool<sqlx::Postgres>,
    /// Tag repository.
    pub tags: PgTagRepository,
    /// Memo repository (read side).
    pub memos: PgMemoRepository,
    /// Activity log.
    pub activities: PgActivityRepository,
    /// Session token lookup.
    pub sessions: PgSessionRepository,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::Pool<sqlx::Postgres>) -> Self {
        Self {
            tags: PgTagRepository::new(pool.clone()),
            memos: PgMemoRepository::new(pool.clone()),
            activities: PgActivityRepository::new(pool.clone()),
            sessions: PgSessionRepository::new(pool.clone()),
            pool,
        }
    }

    /// Create a new Database instance by connecting to the given URL.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = create_pool(url).await?;
        Ok(Self::new(pool))
    }

    /// Create with custom pool configuration.
    pub async fn connect_with_config(url: &str, config: PoolConfig) -> Result<Self> {
        let pool = create_pool_with_config(url, config).await?;
        Ok(Self::new(pool))
    }

    /// Run pending migrations.
    #[cfg(feature = "migrations")]
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| Error::Database(sqlx::Error::Migrate(Box::new(e))))?;
        Ok(())
    }
}

#[async_trait]
impl TagRepository for Database {
    async fn upsert_tag(&self, upsert: &TagUpsert) -> Result<Tag> {
        self.tags.upsert_tag(upsert).await
    }

    async fn list_tags(&self, find: &TagFind) -> Result<Vec<Tag>> {
        self.tags.list_tags(find).await
    }

    async fn delete_tag(&self, delete: &TagDelete) -> Result<()> {
        self.tags.delete_tag(delete).await
    }
}

#[async_trait]
impl MemoRepository for Database {
    async fn list_memos(&self, find: &MemoFind) -> Result<Vec<Memo>> {
        self.memos.list_memos(find).await
    }
}
