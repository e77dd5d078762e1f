use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::auth;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated identity resolved from the session cookie.
///
/// Protected handlers receive this explicitly as `Extension<CurrentUser>`; it is
/// only present when the cookie verified and the user still exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
}

/// Resolve the session cookie into a `CurrentUser` request extension.
/// Requests without a valid session pass through anonymously; a store
/// failure while loading the user ends the request with its error page.
pub async fn load_session(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    if let Some(token) = auth::session_token_from_headers(request.headers()) {
        match auth::validate_session_token(&token, &state.config.security.session_secret) {
            Ok(claims) => match state.store.find_user(claims.sub).await {
                Ok(Some(user)) if user.username == claims.username => {
                    request.extensions_mut().insert(CurrentUser {
                        id: user.id,
                        username: user.username,
                    });
                }
                Ok(_) => {
                    tracing::warn!("Session for user '{}' (ID: {}) no longer matches a user", claims.username, claims.sub);
                }
                Err(e) => {
                    tracing::error!("Failed to load session user {}: {}", claims.sub, e);
                    return AppError::from(e).into_response();
                }
            },
            Err(e) => {
                tracing::debug!("Ignoring session cookie: {}", e);
            }
        }
    }

    next.run(request).await
}
