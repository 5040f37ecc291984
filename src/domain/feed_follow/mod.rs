pub mod error;
pub mod model;
pub mod service;

pub use error::FeedFollowServiceError;
pub use model::{CreateFeedFollowRequest, FeedFollow};
pub use service::{FeedFollowService, FeedFollowServiceApi};
