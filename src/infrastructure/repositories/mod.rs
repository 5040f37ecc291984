pub mod feed_follow_repository;
pub mod feed_repository;
pub mod memory;
pub mod user_repository;

pub use feed_follow_repository::{FeedFollowRepository, PgFeedFollowRepository};
pub use feed_repository::{FeedRepository, PgFeedRepository};
pub use memory::InMemoryStore;
pub use user_repository::{PgUserRepository, UserRepository};

use std::sync::Arc;

use crate::infrastructure::db::{DbPool, HealthCheck};

/// Every store capability the handlers need, behind trait objects
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub feeds: Arc<dyn FeedRepository>,
    pub feed_follows: Arc<dyn FeedFollowRepository>,
    pub health: Arc<dyn HealthCheck>,
}

impl Repositories {
    pub fn postgres(pool: Arc<DbPool>) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone())),
            feeds: Arc::new(PgFeedRepository::new(pool.clone())),
            feed_follows: Arc::new(PgFeedFollowRepository::new(pool.clone())),
            health: pool,
        }
    }

    pub fn in_memory(store: Arc<InMemoryStore>) -> Self {
        Self {
            users: store.clone(),
            feeds: store.clone(),
            feed_follows: store.clone(),
            health: store,
        }
    }
}
