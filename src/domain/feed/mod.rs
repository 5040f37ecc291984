pub mod error;
pub mod model;
pub mod service;

pub use error::FeedServiceError;
pub use model::Feed;
pub use service::{FeedService, FeedServiceApi};

use serde::{Deserialize, Serialize};

use crate::domain::feed_follow::FeedFollow;

/// Request to create a new feed
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateFeedRequest {
    pub name: String,
    pub url: String,
}

/// Response for POST /v1/feeds: the feed plus the creator's automatic follow
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateFeedResponse {
    pub feed: Feed,
    pub feed_follow: FeedFollow,
}
