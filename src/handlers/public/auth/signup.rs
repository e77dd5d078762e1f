// handlers/public/auth/signup.rs - GET/POST /accounts/signup/ handler

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use crate::auth;
use crate::database::{models::NewUser, StoreError};
use crate::error::{AppError, AppResult};
use crate::forms::SignupForm;
use crate::state::AppState;
use crate::templates::{self, accounts::SIGNUP_ERROR};

use super::login::LOGIN_REDIRECT;

/// GET /accounts/signup/
pub async fn signup_get() -> Html<String> {
    templates::accounts::signup("")
}

/**
 * POST /accounts/signup/ - create an account and log it in
 *
 * Validation failures (bad username, taken username, mismatched or weak
 * passwords) all redisplay the empty form with the same generic message.
 */
pub async fn signup_post(State(state): State<AppState>, Form(form): Form<SignupForm>) -> AppResult<Response> {
    let signup = match form.validate() {
        Ok(signup) => signup,
        Err(errors) => {
            tracing::debug!("Signup rejected: {:?}", errors);
            return Ok(rejected());
        }
    };

    if state.store.find_user_by_username(&signup.username).await?.is_some() {
        tracing::debug!("Signup rejected: username '{}' is taken", signup.username);
        return Ok(rejected());
    }

    let cost = state.config.security.password_hash_cost;
    let password = signup.password;
    let password_hash = tokio::task::spawn_blocking(move || auth::hash_password(&password, cost))
        .await
        .map_err(|e| AppError::internal_server_error(format!("password hash task failed: {e}")))??;

    let user = match state
        .store
        .create_user(NewUser {
            username: signup.username,
            password_hash,
        })
        .await
    {
        Ok(user) => user,
        // lost a race with another signup for the same name
        Err(StoreError::Conflict(_)) => return Ok(rejected()),
        Err(e) => return Err(e.into()),
    };

    let cookie = auth::start_session(&user, &state.config.security)?;
    tracing::info!("New user '{}' (ID: {}) signed up", user.username, user.id);

    Ok(([(header::SET_COOKIE, cookie)], Redirect::to(LOGIN_REDIRECT)).into_response())
}

fn rejected() -> Response {
    templates::accounts::signup(SIGNUP_ERROR).into_response()
}
