// handlers/protected/cats/create.rs - GET/POST /cats/create/ handler

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Form,
};

use crate::error::AppResult;
use crate::forms::{CatCreateForm, FormErrors};
use crate::middleware::CurrentUser;
use crate::state::AppState;
use crate::templates;

/// GET /cats/create/
pub async fn create_get(Extension(user): Extension<CurrentUser>) -> Html<String> {
    templates::cats::create_form(&user, &CatCreateForm::default(), &FormErrors::new())
}

/**
 * POST /cats/create/ - create a cat owned by the session user
 *
 * The owner always comes from the session; the form has no owner field, so
 * anything the client sends for one is dropped.
 */
pub async fn create_post(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Form(form): Form<CatCreateForm>,
) -> AppResult<Response> {
    let new_cat = match form.validate() {
        Ok(new_cat) => new_cat,
        Err(errors) => return Ok(templates::cats::create_form(&user, &form, &errors).into_response()),
    };

    let cat = state.store.create_cat(user.id, new_cat).await?;
    tracing::info!("User {} created cat {} '{}'", user.id, cat.id, cat.name);

    Ok(Redirect::to(&cat.detail_url()).into_response())
}
