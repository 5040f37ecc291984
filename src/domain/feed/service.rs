use super::error::FeedServiceError;
use crate::domain::feed::{CreateFeedRequest, CreateFeedResponse, Feed};
use crate::domain::feed_follow::FeedFollow;
use crate::error::AppError;
use crate::infrastructure::repositories::{FeedFollowRepository, FeedRepository};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub struct FeedService {
    feed_repo: Arc<dyn FeedRepository>,
    feed_follow_repo: Arc<dyn FeedFollowRepository>,
}

impl FeedService {
    pub fn new(
        feed_repo: Arc<dyn FeedRepository>,
        feed_follow_repo: Arc<dyn FeedFollowRepository>,
    ) -> Self {
        Self {
            feed_repo,
            feed_follow_repo,
        }
    }
}

#[async_trait]
pub trait FeedServiceApi: Send + Sync {
    /// Create a feed owned by `user_id` and follow it on the owner's behalf.
    ///
    /// The two writes are independent: if the follow fails the feed stays persisted
    /// and the whole call still reports failure.
    async fn create_feed(
        &self,
        user_id: Uuid,
        request: CreateFeedRequest,
    ) -> Result<CreateFeedResponse, FeedServiceError>;

    /// Every feed from every owner
    async fn list_feeds(&self) -> Result<Vec<Feed>, FeedServiceError>;
}

#[async_trait]
impl FeedServiceApi for FeedService {
    async fn create_feed(
        &self,
        user_id: Uuid,
        request: CreateFeedRequest,
    ) -> Result<CreateFeedResponse, FeedServiceError> {
        let feed = Feed::new(user_id, request.name, request.url);
        let feed = self
            .feed_repo
            .create(&feed)
            .await
            .map_err(dependency("couldn't create feed"))?;

        let feed_follow = FeedFollow::new(user_id, feed.id);
        let feed_follow = self
            .feed_follow_repo
            .create(&feed_follow)
            .await
            .map_err(dependency("couldn't create feed follow"))?;

        tracing::info!(
            feed_id = %feed.id,
            feed_follow_id = %feed_follow.id,
            user_id = %user_id,
            "Feed created"
        );

        Ok(CreateFeedResponse { feed, feed_follow })
    }

    async fn list_feeds(&self) -> Result<Vec<Feed>, FeedServiceError> {
        self.feed_repo
            .list_all()
            .await
            .map_err(dependency("couldn't get feeds"))
    }
}

fn dependency(context: &'static str) -> impl FnOnce(AppError) -> FeedServiceError {
    move |e| {
        tracing::error!(error = %e, "{}", context);
        FeedServiceError::Dependency(context.to_string())
    }
}
