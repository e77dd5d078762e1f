// handlers/public/auth/login.rs - POST / and POST /accounts/login/ handler

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Redirect, Response},
    Form,
};

use crate::auth;
use crate::error::{AppError, AppResult};
use crate::forms::{login::safe_next, LoginForm};
use crate::state::AppState;
use crate::templates::{self, home::LOGIN_ERROR};

/// Where a fresh session lands when no `next` was requested
pub const LOGIN_REDIRECT: &str = "/cats/";

/**
 * POST / - verify credentials and open a session
 *
 * Success sets the session cookie and redirects to `next` (local paths only)
 * or the cat list. Any failure re-renders the login page with one generic
 * message so the response does not reveal whether the username exists.
 */
pub async fn login_post(State(state): State<AppState>, Form(form): Form<LoginForm>) -> AppResult<Response> {
    let next = safe_next(form.next.as_deref());

    let Some((username, password)) = form.credentials() else {
        return Ok(failed(&form, next));
    };

    let Some(user) = state.store.find_user_by_username(username).await? else {
        tracing::info!("Login failed: unknown user '{}'", username);
        return Ok(failed(&form, next));
    };

    if !check_password(password.to_string(), user.password_hash.clone()).await? {
        tracing::info!("Login failed: bad password for '{}'", username);
        return Ok(failed(&form, next));
    }

    let cookie = auth::start_session(&user, &state.config.security)?;
    tracing::info!("User '{}' (ID: {}) logged in", user.username, user.id);

    let target = next.unwrap_or(LOGIN_REDIRECT);
    Ok(([(header::SET_COOKIE, cookie)], Redirect::to(target)).into_response())
}

fn failed(form: &LoginForm, next: Option<&str>) -> Response {
    let username = form.username.as_deref().unwrap_or_default();
    templates::home::home(None, Some(LOGIN_ERROR), username, next).into_response()
}

/// bcrypt is CPU bound; keep it off the async workers
pub(crate) async fn check_password(password: String, hash: String) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || auth::verify_password(&password, &hash))
        .await
        .map_err(|e| AppError::internal_server_error(format!("password check task failed: {e}")))?
        .map_err(AppError::from)
}
