use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum UserServiceError {
    #[error("{0}")]
    Dependency(String),
    #[error("user not found")]
    NotFound,
}

impl From<UserServiceError> for AppError {
    fn from(err: UserServiceError) -> Self {
        match err {
            UserServiceError::NotFound => AppError::NotFound("couldn't get user".to_string()),
            UserServiceError::Dependency(msg) => AppError::Internal(msg),
        }
    }
}
