// handlers/protected/cats/toys.rs - POST /cats/:cat_id/assoc_toy/:toy_id/ and unassoc_toy handlers

use axum::{
    extract::{Path, State},
    response::Redirect,
    Extension,
};

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::state::AppState;

use super::owned_cat;

/// POST /cats/:cat_id/assoc_toy/:toy_id/ - give one of the shared toys to a cat
pub async fn assoc_toy_post(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path((cat_id, toy_id)): Path<(i64, i64)>,
) -> AppResult<Redirect> {
    let cat = owned_cat(&state, &user, cat_id).await?;
    state.store.associate_toy(cat.id, toy_id).await?;
    Ok(Redirect::to(&cat.detail_url()))
}

/// POST /cats/:cat_id/unassoc_toy/:toy_id/ - take a toy away; a no-op if the cat never had it
pub async fn unassoc_toy_post(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path((cat_id, toy_id)): Path<(i64, i64)>,
) -> AppResult<Redirect> {
    let cat = owned_cat(&state, &user, cat_id).await?;
    state.store.dissociate_toy(cat.id, toy_id).await?;
    Ok(Redirect::to(&cat.detail_url()))
}
