use axum::{extract::State, http::StatusCode, Extension, Json};
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::feed_follow::{CreateFeedFollowRequest, FeedFollow, FeedFollowServiceApi};
use crate::{
    error::AppResult,
    infrastructure::{
        auth::AuthUser,
        http::extract::{AppJson, AppPath},
    },
};

pub struct FeedFollowController {
    feed_follow_service: Arc<dyn FeedFollowServiceApi>,
}

impl FeedFollowController {
    pub fn new(feed_follow_service: Arc<dyn FeedFollowServiceApi>) -> Self {
        Self {
            feed_follow_service,
        }
    }

    /// GET /v1/feed_follows - The caller's follows
    pub async fn list_feed_follows(
        State(controller): State<Arc<FeedFollowController>>,
        Extension(auth_user): Extension<AuthUser>,
    ) -> AppResult<Json<Vec<FeedFollow>>> {
        let feed_follows = controller
            .feed_follow_service
            .list_feed_follows(auth_user.user.id)
            .await?;
        Ok(Json(feed_follows))
    }

    /// POST /v1/feed_follows - Follow a feed
    pub async fn follow_feed(
        State(controller): State<Arc<FeedFollowController>>,
        Extension(auth_user): Extension<AuthUser>,
        AppJson(request): AppJson<CreateFeedFollowRequest>,
    ) -> AppResult<(StatusCode, Json<FeedFollow>)> {
        let feed_follow = controller
            .feed_follow_service
            .follow_feed(auth_user.user.id, request)
            .await?;
        Ok((StatusCode::CREATED, Json(feed_follow)))
    }

    /// DELETE /v1/feed_follows/{feedFollowID} - Unfollow
    pub async fn unfollow_feed(
        State(controller): State<Arc<FeedFollowController>>,
        Extension(auth_user): Extension<AuthUser>,
        AppPath(feed_follow_id): AppPath<Uuid>,
    ) -> AppResult<Json<Value>> {
        controller
            .feed_follow_service
            .unfollow_feed(auth_user.user.id, feed_follow_id)
            .await?;
        Ok(Json(json!({})))
    }
}
