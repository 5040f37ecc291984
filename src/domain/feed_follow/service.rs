use super::error::{FeedFollowServiceError, DELETE_FAILED};
use super::{CreateFeedFollowRequest, FeedFollow};
use crate::error::AppError;
use crate::infrastructure::repositories::FeedFollowRepository;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub struct FeedFollowService {
    feed_follow_repo: Arc<dyn FeedFollowRepository>,
}

impl FeedFollowService {
    pub fn new(feed_follow_repo: Arc<dyn FeedFollowRepository>) -> Self {
        Self { feed_follow_repo }
    }
}

#[async_trait]
pub trait FeedFollowServiceApi: Send + Sync {
    /// Follow a feed. Feed existence is left to the store's foreign key.
    async fn follow_feed(
        &self,
        user_id: Uuid,
        request: CreateFeedFollowRequest,
    ) -> Result<FeedFollow, FeedFollowServiceError>;

    async fn list_feed_follows(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<FeedFollow>, FeedFollowServiceError>;

    /// Delete a follow owned by `user_id`
    async fn unfollow_feed(
        &self,
        user_id: Uuid,
        feed_follow_id: Uuid,
    ) -> Result<(), FeedFollowServiceError>;
}

#[async_trait]
impl FeedFollowServiceApi for FeedFollowService {
    async fn follow_feed(
        &self,
        user_id: Uuid,
        request: CreateFeedFollowRequest,
    ) -> Result<FeedFollow, FeedFollowServiceError> {
        let feed_follow = FeedFollow::new(user_id, request.feed_id);

        let feed_follow = self
            .feed_follow_repo
            .create(&feed_follow)
            .await
            .map_err(dependency("couldn't create feed follow"))?;

        tracing::info!(
            feed_follow_id = %feed_follow.id,
            feed_id = %feed_follow.feed_id,
            user_id = %user_id,
            "Feed followed"
        );
        Ok(feed_follow)
    }

    async fn list_feed_follows(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<FeedFollow>, FeedFollowServiceError> {
        self.feed_follow_repo
            .find_by_user(user_id)
            .await
            .map_err(dependency("couldn't get feed follows"))
    }

    async fn unfollow_feed(
        &self,
        user_id: Uuid,
        feed_follow_id: Uuid,
    ) -> Result<(), FeedFollowServiceError> {
        let deleted = self
            .feed_follow_repo
            .delete_for_user(feed_follow_id, user_id)
            .await
            .map_err(dependency(DELETE_FAILED))?;

        if !deleted {
            tracing::warn!(
                feed_follow_id = %feed_follow_id,
                user_id = %user_id,
                "Delete matched no feed follow owned by caller"
            );
            return Err(FeedFollowServiceError::NothingDeleted);
        }

        tracing::info!(feed_follow_id = %feed_follow_id, user_id = %user_id, "Feed unfollowed");
        Ok(())
    }
}

fn dependency(context: &'static str) -> impl FnOnce(AppError) -> FeedFollowServiceError {
    move |e| {
        tracing::error!(error = %e, "{}", context);
        FeedFollowServiceError::Dependency(context.to_string())
    }
}
