// app.rs - Router assembly
//
// Public pages are reachable anonymously. Protected routes sit behind
// `require_login`, and `load_session` runs ahead of both so every handler
// sees the same `CurrentUser` (or none).

use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{protected, public};
use crate::middleware::{load_session, require_login};
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .merge(public_routes())
        .merge(account_routes())
        // Protected
        .merge(cat_routes().route_layer(from_fn(require_login)))
        .merge(toy_routes().route_layer(from_fn(require_login)))
        // Global middleware
        .layer(from_fn_with_state(state.clone(), load_session))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(public::home_get).post(public::login_post))
        .route("/home/", get(public::home_alias))
        .route("/about/", get(public::about))
        .route("/health", get(public::health))
}

fn account_routes() -> Router<AppState> {
    Router::new()
        // Login form is also served where the login gate redirects to
        .route("/accounts/login/", get(public::home_get).post(public::login_post))
        .route("/accounts/signup/", get(public::signup_get).post(public::signup_post))
        .route("/accounts/logout/", post(public::logout_post))
}

fn cat_routes() -> Router<AppState> {
    use protected::cats;

    Router::new()
        .route("/cats/", get(cats::index_get))
        .route("/cats/create/", get(cats::create_get).post(cats::create_post))
        .route("/cats/:cat_id/", get(cats::detail_get))
        .route("/cats/:cat_id/update/", get(cats::update_get).post(cats::update_post))
        .route("/cats/:cat_id/delete/", get(cats::delete_get).post(cats::delete_post))
        .route("/cats/:cat_id/add_feeding/", post(protected::add_feeding))
        .route("/cats/:cat_id/assoc_toy/:toy_id/", post(cats::assoc_toy_post))
        .route("/cats/:cat_id/unassoc_toy/:toy_id/", post(cats::unassoc_toy_post))
}

fn toy_routes() -> Router<AppState> {
    use protected::toys;

    Router::new()
        .route("/toys/", get(toys::index_get))
        .route("/toys/create/", get(toys::create_get).post(toys::create_post))
        .route("/toys/:toy_id/", get(toys::detail_get))
}
