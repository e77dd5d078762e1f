// handlers/public/auth/logout.rs - POST /accounts/logout/ handler

use axum::{
    http::header,
    response::{IntoResponse, Redirect},
    Extension,
};

use crate::auth;
use crate::middleware::CurrentUser;

/// Drop the session cookie and return to the home page
pub async fn logout_post(user: Option<Extension<CurrentUser>>) -> impl IntoResponse {
    if let Some(Extension(user)) = user {
        tracing::info!("User '{}' (ID: {}) logged out", user.username, user.id);
    }
    ([(header::SET_COOKIE, auth::clear_session_cookie())], Redirect::to("/"))
}
