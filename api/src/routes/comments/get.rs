use axum::{Json, extract::State};
use db::models::comment::Model as CommentModel;

use crate::{error::ApiError, state::AppState};

/// GET /api/comments
///
/// Returns every comment, newest first. No pagination.
///
/// ### Responses
/// - `200 OK` → `[Comment]`
/// - `401 Unauthorized` → missing or invalid token (from the auth guard)
/// - `500 Internal Server Error` → `Server Error`
pub async fn get_comments(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<CommentModel>>, ApiError> {
    let comments = CommentModel::find_all_newest_first(app_state.db()).await?;
    Ok(Json(comments))
}
