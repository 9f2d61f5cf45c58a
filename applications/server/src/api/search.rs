/// User search API routes
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use phasebook_core::{SearchParams, User};

/// GET /search, GET /api/search
///
/// Accepts `id`, `name`, `age` and `occupation` in the query string. Unknown
/// keys are ignored and a repeated key keeps its first value. Always answers
/// 200 with the ranked users, possibly none.
pub async fn search(
    State(app_state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<Vec<User>> {
    let params = SearchParams::from_pairs(pairs);
    let users = app_state.dataset.search(&params);
    tracing::debug!(?params, results = users.len(), "User search");
    Json(users)
}
