// handlers/protected/cats/update.rs - GET/POST /cats/:id/update/ handler

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Form,
};

use crate::error::{AppError, AppResult};
use crate::forms::{CatUpdateForm, FormErrors};
use crate::middleware::CurrentUser;
use crate::state::AppState;
use crate::templates;

use super::writable_cat;

/// GET /cats/:id/update/ - edit form prefilled with the stored values
pub async fn update_get(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Html<String>> {
    let cat = writable_cat(&state, &user, id, "update").await?;
    let form = CatUpdateForm::from_cat(&cat);
    Ok(templates::cats::update_form(&user, &cat, &form, &FormErrors::new()))
}

/// POST /cats/:id/update/ - change breed, description and age; the name stays
pub async fn update_post(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Form(form): Form<CatUpdateForm>,
) -> AppResult<Response> {
    let cat = writable_cat(&state, &user, id, "update").await?;

    let changes = match form.validate() {
        Ok(changes) => changes,
        Err(errors) => return Ok(templates::cats::update_form(&user, &cat, &form, &errors).into_response()),
    };

    let updated = state
        .store
        .update_cat(cat.id, changes)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Cat {id} was deleted during update")))?;

    Ok(Redirect::to(&updated.detail_url()).into_response())
}
