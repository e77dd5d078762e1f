// handlers/protected/toys/detail.rs - GET /toys/:toy_id/ handler

use axum::{
    extract::{Path, State},
    response::Html,
    Extension,
};

use crate::error::{AppError, AppResult};
use crate::middleware::CurrentUser;
use crate::state::AppState;
use crate::templates;

/// GET /toys/:toy_id/ - an unknown id fails the request as a server error
pub async fn detail_get(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(toy_id): Path<i64>,
) -> AppResult<Html<String>> {
    let toy = state
        .store
        .find_toy(toy_id)
        .await?
        .ok_or_else(|| AppError::record_not_found(format!("Toy {toy_id} does not exist")))?;

    Ok(templates::toys::detail(&user, &toy))
}
