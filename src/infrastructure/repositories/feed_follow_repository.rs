use crate::infrastructure::db::DbPool;
use crate::{domain::feed_follow::FeedFollow, error::AppResult};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Persistence for follows. Reads and deletes are always scoped by owner.
#[async_trait]
pub trait FeedFollowRepository: Send + Sync {
    /// Insert a follow. Fails if the user or feed does not exist.
    async fn create(&self, feed_follow: &FeedFollow) -> AppResult<FeedFollow>;

    /// Follows owned by `user_id`, oldest first
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<FeedFollow>>;

    /// Delete the follow matching both `id` and `user_id`.
    /// Returns whether a row was removed.
    async fn delete_for_user(&self, id: Uuid, user_id: Uuid) -> AppResult<bool>;
}

pub struct PgFeedFollowRepository {
    pool: Arc<DbPool>,
}

impl PgFeedFollowRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedFollowRepository for PgFeedFollowRepository {
    async fn create(&self, feed_follow: &FeedFollow) -> AppResult<FeedFollow> {
        let pool = self.pool.as_ref();
        let feed_follow = sqlx::query_as::<_, FeedFollow>(
            r#"
            INSERT INTO feed_follows (id, created_at, updated_at, user_id, feed_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, created_at, updated_at, user_id, feed_id
            "#,
        )
        .bind(feed_follow.id)
        .bind(feed_follow.created_at)
        .bind(feed_follow.updated_at)
        .bind(feed_follow.user_id)
        .bind(feed_follow.feed_id)
        .fetch_one(pool)
        .await?;

        Ok(feed_follow)
    }

    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<FeedFollow>> {
        let pool = self.pool.as_ref();
        let feed_follows = sqlx::query_as::<_, FeedFollow>(
            r#"
            SELECT id, created_at, updated_at, user_id, feed_id
            FROM feed_follows
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(feed_follows)
    }

    async fn delete_for_user(&self, id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query(
            r#"
            DELETE FROM feed_follows
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
