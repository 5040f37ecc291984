use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::domain::auth::extract_api_key;
use crate::domain::user::{User, UserServiceApi};
use crate::error::AppError;

/// Identity resolved by [`auth_middleware`], handed to scoped handlers
/// through request extensions.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
}

/// Authentication gate for `Authorization: ApiKey <token>`.
///
/// Runs before every key-scoped handler. A missing or malformed header is a 401;
/// a key that does not resolve (including lookup failures) is a 404. In both
/// cases the wrapped handler never runs. Every request does a fresh lookup.
pub async fn auth_middleware(
    State(user_service): State<Arc<dyn UserServiceApi>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let api_key = extract_api_key(request.headers())?.to_owned();

    let user = user_service.find_by_api_key(&api_key).await?;
    tracing::debug!(user_id = %user.id, "Request authenticated");

    request.extensions_mut().insert(AuthUser { user });

    Ok(next.run(request).await)
}
