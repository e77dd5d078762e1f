// handlers/protected/toys/create.rs - GET/POST /toys/create/ handler

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Form,
};

use crate::error::AppResult;
use crate::forms::{FormErrors, ToyForm};
use crate::middleware::CurrentUser;
use crate::state::AppState;
use crate::templates;

/// GET /toys/create/
pub async fn create_get(Extension(user): Extension<CurrentUser>) -> Html<String> {
    templates::toys::create_form(&user, &ToyForm::default(), &FormErrors::new())
}

/// POST /toys/create/ - add a toy to the shared catalog
pub async fn create_post(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Form(form): Form<ToyForm>,
) -> AppResult<Response> {
    let new_toy = match form.validate() {
        Ok(new_toy) => new_toy,
        Err(errors) => return Ok(templates::toys::create_form(&user, &form, &errors).into_response()),
    };

    let toy = state.store.create_toy(new_toy).await?;
    tracing::info!("User {} created toy {} '{}'", user.id, toy.id, toy.name);

    Ok(Redirect::to(&toy.detail_url()).into_response())
}
