use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{FeedFollowRepository, FeedRepository, UserRepository};
use crate::domain::{feed::Feed, feed_follow::FeedFollow, user::User};
use crate::error::{AppError, AppResult};
use crate::infrastructure::db::HealthCheck;

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    feeds: Vec<Feed>,
    feed_follows: Vec<FeedFollow>,
}

/// Process-local store implementing every repository trait.
///
/// Enforces the same constraints as the SQL schema: unique API keys and
/// foreign keys from feeds and follows to their users and feeds. Rows keep
/// insertion order. Used by the test suites and by `DATABASE_URL=memory`.
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
    calls: AtomicUsize,
    failing: AtomicBool,
    failing_follow_writes: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of repository operations invoked so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make every operation fail as if the store were unreachable
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Make only follow inserts fail
    pub fn fail_feed_follow_writes(&self, failing: bool) {
        self.failing_follow_writes.store(failing, Ordering::SeqCst);
    }

    fn enter(&self) -> AppResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::Internal("store unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: &User) -> AppResult<User> {
        self.enter()?;
        let mut tables = self.tables.write().await;

        if tables.users.iter().any(|u| u.api_key == user.api_key) {
            return Err(AppError::Conflict("API key already issued".to_string()));
        }
        if tables.users.iter().any(|u| u.id == user.id) {
            return Err(AppError::Conflict("duplicate user id".to_string()));
        }

        tables.users.push(user.clone());
        Ok(user.clone())
    }

    async fn find_by_api_key(&self, api_key: &str) -> AppResult<Option<User>> {
        self.enter()?;
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.api_key == api_key).cloned())
    }
}

#[async_trait]
impl FeedRepository for InMemoryStore {
    async fn create(&self, feed: &Feed) -> AppResult<Feed> {
        self.enter()?;
        let mut tables = self.tables.write().await;

        if !tables.users.iter().any(|u| u.id == feed.user_id) {
            return Err(AppError::Internal(
                "feeds.user_id references a missing user".to_string(),
            ));
        }

        tables.feeds.push(feed.clone());
        Ok(feed.clone())
    }

    async fn list_all(&self) -> AppResult<Vec<Feed>> {
        self.enter()?;
        Ok(self.tables.read().await.feeds.clone())
    }
}

#[async_trait]
impl FeedFollowRepository for InMemoryStore {
    async fn create(&self, feed_follow: &FeedFollow) -> AppResult<FeedFollow> {
        self.enter()?;
        if self.failing_follow_writes.load(Ordering::SeqCst) {
            return Err(AppError::Internal("store unavailable".to_string()));
        }
        let mut tables = self.tables.write().await;

        if !tables.users.iter().any(|u| u.id == feed_follow.user_id) {
            return Err(AppError::Internal(
                "feed_follows.user_id references a missing user".to_string(),
            ));
        }
        if !tables.feeds.iter().any(|f| f.id == feed_follow.feed_id) {
            return Err(AppError::Internal(
                "feed_follows.feed_id references a missing feed".to_string(),
            ));
        }

        tables.feed_follows.push(feed_follow.clone());
        Ok(feed_follow.clone())
    }

    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<FeedFollow>> {
        self.enter()?;
        let tables = self.tables.read().await;
        Ok(tables
            .feed_follows
            .iter()
            .filter(|ff| ff.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete_for_user(&self, id: Uuid, user_id: Uuid) -> AppResult<bool> {
        self.enter()?;
        let mut tables = self.tables.write().await;
        let before = tables.feed_follows.len();
        tables
            .feed_follows
            .retain(|ff| !(ff.id == id && ff.user_id == user_id));
        Ok(tables.feed_follows.len() < before)
    }
}

#[async_trait]
impl HealthCheck for InMemoryStore {
    async fn ping(&self) -> AppResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::Internal("store unavailable".to_string()));
        }
        Ok(())
    }
}
