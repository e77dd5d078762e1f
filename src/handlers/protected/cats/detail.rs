// handlers/protected/cats/detail.rs - GET /cats/:cat_id/ handler

use axum::{
    extract::{Path, State},
    response::Html,
    Extension,
};

use crate::error::AppResult;
use crate::forms::FeedingForm;
use crate::middleware::CurrentUser;
use crate::state::AppState;
use crate::templates::{self, cats::CatDetail};

use super::owned_cat;

/**
 * GET /cats/:cat_id/ - one cat with its feedings, toys and an empty feeding form
 *
 * The cat must belong to the session user. A miss (unknown id or someone
 * else's cat) fails the request as a server error.
 */
pub async fn detail_get(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(cat_id): Path<i64>,
) -> AppResult<Html<String>> {
    let cat = owned_cat(&state, &user, cat_id).await?;
    let feedings = state.store.list_feedings(cat.id).await?;
    let toys = state.store.list_cat_toys(cat.id).await?;
    let available_toys: Vec<_> = state
        .store
        .list_toys()
        .await?
        .into_iter()
        .filter(|toy| !toys.iter().any(|owned| owned.id == toy.id))
        .collect();

    Ok(templates::cats::detail(
        &user,
        CatDetail {
            cat: &cat,
            feedings: &feedings,
            toys: &toys,
            available_toys: &available_toys,
            feeding_form: &FeedingForm::default(),
        },
    ))
}
