use super::error::UserServiceError;
use super::{CreateUserRequest, User};
use crate::domain::auth::generate_api_key;
use crate::error::AppError;
use crate::infrastructure::repositories::UserRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
pub trait UserServiceApi: Send + Sync {
    /// Register a user. The returned record is the only place the API key is exposed.
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, UserServiceError>;

    /// Resolve an API key to its owner
    async fn find_by_api_key(&self, api_key: &str) -> Result<User, UserServiceError>;
}

#[async_trait]
impl UserServiceApi for UserService {
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, UserServiceError> {
        let user = User::new(request.name, generate_api_key());

        let user = self
            .user_repo
            .create(&user)
            .await
            .map_err(dependency("couldn't create user"))?;

        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }

    async fn find_by_api_key(&self, api_key: &str) -> Result<User, UserServiceError> {
        // lookup failures and unknown keys are reported the same way
        match self.user_repo.find_by_api_key(api_key).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(UserServiceError::NotFound),
            Err(e) => {
                tracing::error!(error = %e, "API key lookup failed");
                Err(UserServiceError::NotFound)
            }
        }
    }
}

fn dependency(context: &'static str) -> impl FnOnce(AppError) -> UserServiceError {
    move |e| {
        tracing::error!(error = %e, "{}", context);
        UserServiceError::Dependency(context.to_string())
    }
}
