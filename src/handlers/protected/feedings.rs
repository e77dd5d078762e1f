// handlers/protected/feedings.rs - POST /cats/:cat_id/add_feeding/ handler

use axum::{
    extract::{Path, State},
    response::Redirect,
    Extension, Form,
};

use crate::error::AppResult;
use crate::forms::FeedingForm;
use crate::middleware::CurrentUser;
use crate::state::AppState;

use super::cats::owned_cat;

/**
 * POST /cats/:cat_id/add_feeding/ - record a feeding for one of the user's cats
 *
 * Always redirects back to the cat's detail page. An invalid date or meal
 * stores nothing and reports nothing to the client.
 */
pub async fn add_feeding(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(cat_id): Path<i64>,
    Form(form): Form<FeedingForm>,
) -> AppResult<Redirect> {
    let cat = owned_cat(&state, &user, cat_id).await?;

    match form.validate() {
        Ok(new_feeding) => {
            let feeding = state.store.add_feeding(cat.id, new_feeding).await?;
            tracing::debug!("Recorded feeding {} for cat {}", feeding.id, cat.id);
        }
        Err(errors) => {
            tracing::debug!("Discarded invalid feeding for cat {}: {:?}", cat.id, errors);
        }
    }

    Ok(Redirect::to(&cat.detail_url()))
}
