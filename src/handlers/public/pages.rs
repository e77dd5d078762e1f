// handlers/public/pages.rs - Home, about and health handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    Extension,
};
use serde::Deserialize;
use serde_json::json;

use crate::forms::login::safe_next;
use crate::middleware::CurrentUser;
use crate::state::AppState;
use crate::templates;

#[derive(Debug, Default, Deserialize)]
pub struct LoginQuery {
    pub next: Option<String>,
}

/// GET / and GET /accounts/login/ - home page with the login form
pub async fn home_get(user: Option<Extension<CurrentUser>>, Query(query): Query<LoginQuery>) -> Html<String> {
    let user = user.map(|Extension(user)| user);
    templates::home::home(user.as_ref(), None, "", safe_next(query.next.as_deref()))
}

/// GET /home/ - same page, never processes a login
pub async fn home_alias(user: Option<Extension<CurrentUser>>) -> Html<String> {
    let user = user.map(|Extension(user)| user);
    templates::home::home(user.as_ref(), None, "", None)
}

/// GET /about/
pub async fn about(user: Option<Extension<CurrentUser>>) -> Html<String> {
    let user = user.map(|Extension(user)| user);
    templates::home::about(user.as_ref())
}

/// GET /health - store liveness probe
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.store.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "success": false,
                    "error": "database unavailable",
                    "data": {
                        "status": "degraded",
                        "timestamp": now
                    }
                })),
            )
        }
    }
}
