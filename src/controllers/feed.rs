use axum::{extract::State, http::StatusCode, Extension, Json};
use std::sync::Arc;

use crate::domain::feed::{CreateFeedRequest, CreateFeedResponse, Feed, FeedServiceApi};
use crate::{
    error::AppResult,
    infrastructure::{auth::AuthUser, http::extract::AppJson},
};

pub struct FeedController {
    feed_service: Arc<dyn FeedServiceApi>,
}

impl FeedController {
    pub fn new(feed_service: Arc<dyn FeedServiceApi>) -> Self {
        Self { feed_service }
    }

    /// GET /v1/feeds - List every feed (public)
    pub async fn list_feeds(
        State(controller): State<Arc<FeedController>>,
    ) -> AppResult<Json<Vec<Feed>>> {
        let feeds = controller.feed_service.list_feeds().await?;
        Ok(Json(feeds))
    }

    /// POST /v1/feeds - Create a feed and follow it
    pub async fn create_feed(
        State(controller): State<Arc<FeedController>>,
        Extension(auth_user): Extension<AuthUser>,
        AppJson(request): AppJson<CreateFeedRequest>,
    ) -> AppResult<(StatusCode, Json<CreateFeedResponse>)> {
        let created = controller
            .feed_service
            .create_feed(auth_user.user.id, request)
            .await?;
        Ok((StatusCode::CREATED, Json(created)))
    }
}
