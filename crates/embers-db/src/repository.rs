//! Item repository for PostgreSQL storage.

use embers_core::{AppError, Item, ItemStore, UserAggregate};
use sqlx::{Pool, Postgres};

/// Schema statements applied at startup. Each one is idempotent, so
/// running them against an existing database is a no-op.
const MIGRATIONS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS items (
        id      BIGINT PRIMARY KEY,
        author  TEXT NOT NULL,
        time    TIMESTAMPTZ NOT NULL,
        score   BIGINT NOT NULL,
        title   TEXT NOT NULL,
        url     TEXT NOT NULL,
        type    TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_items_author ON items (author)",
];

/// Repository for item persistence and read queries.
#[derive(Clone)]
pub struct ItemRepository {
    pool: Pool<Postgres>,
}

impl ItemRepository {
    /// Creates a new repository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Applies the schema statements.
    pub async fn init_schema(&self) -> Result<(), AppError> {
        for statement in MIGRATIONS {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(AppError::DatabaseError)?;
        }
        tracing::info!("Database schema ensured");
        Ok(())
    }

    /// Upserts the batch inside one transaction, keyed by item id.
    /// Returns the number of rows written; any failure rolls the whole
    /// batch back.
    pub async fn upsert_batch(&self, items: &[Item]) -> Result<usize, AppError> {
        if items.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await.map_err(AppError::DatabaseError)?;
        let mut saved = 0usize;

        for item in items {
            sqlx::query(
                r#"
                INSERT INTO items (id, author, time, score, title, url, type)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                ON CONFLICT (id) DO UPDATE SET
                    author = EXCLUDED.author,
                    time = EXCLUDED.time,
                    score = EXCLUDED.score,
                    title = EXCLUDED.title,
                    url = EXCLUDED.url,
                    type = EXCLUDED.type
                "#,
            )
            .bind(item.id)
            .bind(&item.author)
            .bind(item.time)
            .bind(item.score)
            .bind(&item.title)
            .bind(&item.url)
            .bind(&item.kind)
            .execute(&mut *tx)
            .await
            .map_err(AppError::DatabaseError)?;
            saved += 1;
        }

        tx.commit().await.map_err(AppError::DatabaseError)?;

        tracing::debug!(saved, "Item batch committed");
        Ok(saved)
    }

    /// Fetches a single item by id.
    pub async fn get(&self, id: i64) -> Result<Option<Item>, AppError> {
        sqlx::query_as::<_, Item>(
            "SELECT id, author, time, score, title, url, type FROM items WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::DatabaseError)
    }

    /// Lists a window of items ordered by ascending id.
    pub async fn list_page(&self, offset: i64, limit: i64) -> Result<Vec<Item>, AppError> {
        sqlx::query_as::<_, Item>(
            r#"
            SELECT id, author, time, score, title, url, type
            FROM items
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::DatabaseError)
    }

    /// Total number of stored items.
    pub async fn count(&self) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::DatabaseError)?;
        Ok(count)
    }

    /// Lists a window of per-author rollups, ordered by each author's
    /// earliest item id.
    pub async fn user_aggregates(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<UserAggregate>, AppError> {
        sqlx::query_as::<_, UserAggregate>(
            r#"
            SELECT author AS name, COUNT(*) AS item_count, SUM(score)::BIGINT AS score
            FROM items
            GROUP BY author
            ORDER BY MIN(id)
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::DatabaseError)
    }

    /// Number of distinct authors across stored items.
    pub async fn user_count(&self) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(DISTINCT author) FROM items")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::DatabaseError)?;
        Ok(count)
    }

    /// Verifies database connectivity.
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(AppError::DatabaseError)?;
        Ok(())
    }
}

// ===== Trait Implementations: ItemStore =====

impl ItemStore for ItemRepository {
    async fn upsert_batch(&self, items: &[Item]) -> Result<usize, AppError> {
        ItemRepository::upsert_batch(self, items).await
    }

    async fn get(&self, id: i64) -> Result<Option<Item>, AppError> {
        ItemRepository::get(self, id).await
    }

    async fn list_page(&self, offset: i64, limit: i64) -> Result<Vec<Item>, AppError> {
        ItemRepository::list_page(self, offset, limit).await
    }

    async fn count(&self) -> Result<i64, AppError> {
        ItemRepository::count(self).await
    }

    async fn user_aggregates(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<UserAggregate>, AppError> {
        ItemRepository::user_aggregates(self, offset, limit).await
    }

    async fn user_count(&self) -> Result<i64, AppError> {
        ItemRepository::user_count(self).await
    }

    async fn health_check(&self) -> Result<(), AppError> {
        ItemRepository::health_check(self).await
    }
}
