// handlers/protected/toys/index.rs - GET /toys/ handler

use axum::{extract::State, response::Html, Extension};

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::state::AppState;
use crate::templates;

pub async fn index_get(State(state): State<AppState>, Extension(user): Extension<CurrentUser>) -> AppResult<Html<String>> {
    let toys = state.store.list_toys().await?;
    Ok(templates::toys::index(&user, &toys))
}
