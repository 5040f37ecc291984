use crate::infrastructure::db::DbPool;
use crate::{
    domain::user::User,
    error::{AppError, AppResult},
};
use async_trait::async_trait;
use std::sync::Arc;

/// Persistence for users.
///
/// The API key is the authentication credential, so `find_by_api_key` must resolve
/// to at most one user. Implementations enforce key uniqueness on insert.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return the stored row
    async fn create(&self, user: &User) -> AppResult<User>;

    /// Find the user owning an API key
    async fn find_by_api_key(&self, api_key: &str) -> AppResult<Option<User>>;
}

pub struct PgUserRepository {
    pool: Arc<DbPool>,
}

impl PgUserRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: &User) -> AppResult<User> {
        let pool = self.pool.as_ref();
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, created_at, updated_at, name, api_key)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, created_at, updated_at, name, api_key
            "#,
        )
        .bind(user.id)
        .bind(user.created_at)
        .bind(user.updated_at)
        .bind(&user.name)
        .bind(&user.api_key)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.is_unique_violation() {
                    return AppError::Conflict("API key already issued".to_string());
                }
            }
            AppError::Database(e)
        })?;

        Ok(user)
    }

    async fn find_by_api_key(&self, api_key: &str) -> AppResult<Option<User>> {
        let pool = self.pool.as_ref();
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, created_at, updated_at, name, api_key
            FROM users
            WHERE api_key = $1
            "#,
        )
        .bind(api_key)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }
}
