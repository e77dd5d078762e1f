use async_trait::async_trait;
use thiserror::Error;

use crate::database::models::{Cat, CatChanges, Feeding, NewCat, NewFeeding, NewToy, NewUser, Toy, User};

/// Errors surfaced by any store implementation
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Migration error: {0}")]
    MigrationError(String),

    #[error(transparent)]
    Sqlx(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound("Record not found".to_string()),
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                StoreError::Conflict(db.message().to_string())
            }
            sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
                StoreError::NotFound(db.message().to_string())
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                StoreError::ConnectionError(err.to_string())
            }
            other => StoreError::Sqlx(other),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::MigrationError(err.to_string())
    }
}

/// Persistence operations for users, cats, feedings and toys.
///
/// Owner filtering is explicit: `find_cat_owned` and `list_cats_for_owner` take the
/// owner id, `find_cat` does not. Handlers pick which lookup they need.
#[async_trait]
pub trait Store: Send + Sync {
    async fn health_check(&self) -> Result<(), StoreError>;

    // Users
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;
    async fn find_user(&self, id: i64) -> Result<Option<User>, StoreError>;
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    // Cats
    async fn list_cats_for_owner(&self, owner_id: i64) -> Result<Vec<Cat>, StoreError>;
    async fn find_cat(&self, id: i64) -> Result<Option<Cat>, StoreError>;
    async fn find_cat_owned(&self, id: i64, owner_id: i64) -> Result<Option<Cat>, StoreError>;
    async fn create_cat(&self, owner_id: i64, cat: NewCat) -> Result<Cat, StoreError>;
    async fn update_cat(&self, id: i64, changes: CatChanges) -> Result<Option<Cat>, StoreError>;
    /// Removes the cat with its feedings and toy associations. Returns false if no such cat.
    async fn delete_cat(&self, id: i64) -> Result<bool, StoreError>;

    // Feedings
    async fn list_feedings(&self, cat_id: i64) -> Result<Vec<Feeding>, StoreError>;
    async fn add_feeding(&self, cat_id: i64, feeding: NewFeeding) -> Result<Feeding, StoreError>;

    // Toys
    async fn list_toys(&self) -> Result<Vec<Toy>, StoreError>;
    async fn find_toy(&self, id: i64) -> Result<Option<Toy>, StoreError>;
    async fn create_toy(&self, toy: NewToy) -> Result<Toy, StoreError>;
    async fn update_toy(&self, id: i64, toy: NewToy) -> Result<Option<Toy>, StoreError>;
    async fn delete_toy(&self, id: i64) -> Result<bool, StoreError>;

    // Cat <-> Toy association
    async fn list_cat_toys(&self, cat_id: i64) -> Result<Vec<Toy>, StoreError>;
    async fn associate_toy(&self, cat_id: i64, toy_id: i64) -> Result<(), StoreError>;
    async fn dissociate_toy(&self, cat_id: i64, toy_id: i64) -> Result<(), StoreError>;
}
