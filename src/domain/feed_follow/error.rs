use crate::error::AppError;

pub const DELETE_FAILED: &str = "could not delete feed";

#[derive(Debug, thiserror::Error)]
pub enum FeedFollowServiceError {
    #[error("{0}")]
    Dependency(String),
    /// The scoped delete matched no row: unknown id, or owned by someone else.
    #[error("feed follow not found")]
    NothingDeleted,
}

impl From<FeedFollowServiceError> for AppError {
    fn from(err: FeedFollowServiceError) -> Self {
        match err {
            FeedFollowServiceError::Dependency(msg) => AppError::Internal(msg),
            // reported exactly like a failed delete for now
            FeedFollowServiceError::NothingDeleted => AppError::Internal(DELETE_FAILED.to_string()),
        }
    }
}
