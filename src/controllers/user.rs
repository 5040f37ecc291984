use axum::{extract::State, http::StatusCode, Extension, Json};
use std::sync::Arc;

use crate::domain::user::{CreateUserRequest, User, UserServiceApi};
use crate::{
    error::AppResult,
    infrastructure::{auth::AuthUser, http::extract::AppJson},
};

pub struct UserController {
    user_service: Arc<dyn UserServiceApi>,
}

impl UserController {
    pub fn new(user_service: Arc<dyn UserServiceApi>) -> Self {
        Self { user_service }
    }

    /// POST /v1/users - Register a user (open enrollment)
    pub async fn create_user(
        State(controller): State<Arc<UserController>>,
        AppJson(request): AppJson<CreateUserRequest>,
    ) -> AppResult<(StatusCode, Json<User>)> {
        let user = controller.user_service.create_user(request).await?;
        Ok((StatusCode::CREATED, Json(user)))
    }

    /// GET /v1/users - The caller's own record, as resolved by the auth gate
    pub async fn get_me(Extension(auth_user): Extension<AuthUser>) -> Json<User> {
        Json(auth_user.user)
    }
}
