// handlers/protected/cats/index.rs - GET /cats/ handler

use axum::{extract::State, response::Html, Extension};

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::state::AppState;
use crate::templates;

/// GET /cats/ - the session user's cats, nobody else's
pub async fn index_get(State(state): State<AppState>, Extension(user): Extension<CurrentUser>) -> AppResult<Html<String>> {
    let cats = state.store.list_cats_for_owner(user.id).await?;
    Ok(templates::cats::index(&user, &cats))
}
