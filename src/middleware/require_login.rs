use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use super::session::CurrentUser;

pub const LOGIN_URL: &str = "/accounts/login/";

/// Gate for protected routes: anonymous requests are sent to the login page
/// with the original path in `next`.
pub async fn require_login(request: Request, next: Next) -> Response {
    if request.extensions().get::<CurrentUser>().is_some() {
        return next.run(request).await;
    }

    let path = request.uri().path();
    tracing::debug!("Anonymous request to {} redirected to login", path);
    Redirect::to(&login_redirect(path)).into_response()
}

pub fn login_redirect(path: &str) -> String {
    format!("{LOGIN_URL}?next={path}")
}
