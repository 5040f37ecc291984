use crate::infrastructure::db::DbPool;
use crate::{domain::feed::Feed, error::AppResult};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait FeedRepository: Send + Sync {
    /// Insert a feed. The owner must exist.
    async fn create(&self, feed: &Feed) -> AppResult<Feed>;

    /// All feeds, oldest first
    async fn list_all(&self) -> AppResult<Vec<Feed>>;
}

pub struct PgFeedRepository {
    pool: Arc<DbPool>,
}

impl PgFeedRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedRepository for PgFeedRepository {
    async fn create(&self, feed: &Feed) -> AppResult<Feed> {
        let pool = self.pool.as_ref();
        let feed = sqlx::query_as::<_, Feed>(
            r#"
            INSERT INTO feeds (id, created_at, updated_at, name, url, user_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, created_at, updated_at, name, url, user_id
            "#,
        )
        .bind(feed.id)
        .bind(feed.created_at)
        .bind(feed.updated_at)
        .bind(&feed.name)
        .bind(&feed.url)
        .bind(feed.user_id)
        .fetch_one(pool)
        .await?;

        Ok(feed)
    }

    async fn list_all(&self) -> AppResult<Vec<Feed>> {
        let pool = self.pool.as_ref();
        let feeds = sqlx::query_as::<_, Feed>(
            r#"
            SELECT id, created_at, updated_at, name, url, user_id
            FROM feeds
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(feeds)
    }
}
