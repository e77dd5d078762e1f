// handlers/protected/cats/delete.rs - GET/POST /cats/:id/delete/ handler

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Extension,
};

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::state::AppState;
use crate::templates;

use super::writable_cat;

pub const DELETE_REDIRECT: &str = "/cats/";

/// GET /cats/:id/delete/ - confirmation page
pub async fn delete_get(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Html<String>> {
    let cat = writable_cat(&state, &user, id, "delete").await?;
    Ok(templates::cats::confirm_delete(&user, &cat))
}

/// POST /cats/:id/delete/ - remove the cat, its feedings and toy links
pub async fn delete_post(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Redirect> {
    let cat = writable_cat(&state, &user, id, "delete").await?;

    if state.store.delete_cat(cat.id).await? {
        tracing::info!("User {} deleted cat {} '{}'", user.id, cat.id, cat.name);
    }

    Ok(Redirect::to(DELETE_REDIRECT))
}
