// handlers/protected/cats/mod.rs - Cat handlers
//
// Reads (index, detail) and the toy/feeding actions go through the owner
// filter. Update and delete look the cat up by id alone and then decide,
// per `security.owner_scoped_cat_writes`, what to do when the session user
// is not the owner (see `writable_cat`).

pub mod create;
pub mod delete;
pub mod detail;
pub mod index;
pub mod toys;
pub mod update;

pub use create::{create_get, create_post};
pub use delete::{delete_get, delete_post};
pub use detail::detail_get;
pub use index::index_get;
pub use toys::{assoc_toy_post, unassoc_toy_post};
pub use update::{update_get, update_post};

use crate::database::models::Cat;
use crate::error::{AppError, AppResult};
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// Owner-filtered lookup; a miss is an unexpected failure, not a 404
pub(crate) async fn owned_cat(state: &AppState, user: &CurrentUser, id: i64) -> AppResult<Cat> {
    state
        .store
        .find_cat_owned(id, user.id)
        .await?
        .ok_or_else(|| AppError::record_not_found(format!("Cat {id} owned by user {} does not exist", user.id)))
}

/// Lookup for update/delete.
///
/// Unknown ids are a 404. A cat owned by someone else is always logged; it is
/// refused as a 404 when owner-scoped writes are configured and allowed otherwise.
pub(crate) async fn writable_cat(state: &AppState, user: &CurrentUser, id: i64, action: &str) -> AppResult<Cat> {
    let cat = state
        .store
        .find_cat(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No cat with id {id}")))?;

    if cat.user_id != user.id {
        if state.config.security.owner_scoped_cat_writes {
            tracing::warn!(
                "Refused cross-owner cat {}: user {} (ID: {}) is not the owner of cat {} (owner ID: {})",
                action, user.username, user.id, cat.id, cat.user_id
            );
            return Err(AppError::not_found(format!("No cat with id {id} owned by user {}", user.id)));
        }
        tracing::warn!(
            "Allowing cross-owner cat {}: user {} (ID: {}) is not the owner of cat {} (owner ID: {})",
            action, user.username, user.id, cat.id, cat.user_id
        );
    }

    Ok(cat)
}
