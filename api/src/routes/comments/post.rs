use axum::{Extension, Json, extract::State, http::StatusCode};
use db::models::{
    comment::Model as CommentModel, post::Model as PostModel, user::Model as UserModel,
};

use crate::{
    auth::AuthUser,
    error::ApiError,
    extract::SanitizedJson,
    routes::comments::common::CreateCommentRequest,
    sanitize::clean_text,
    state::AppState,
};

/// POST /api/comments
///
/// Creates a comment on an existing post as the authenticated user.
///
/// ### Request Body
/// ```json
/// { "content": "Great write-up!", "post": "3" }
/// ```
///
/// ### Responses
/// - `201 Created` → the stored comment
/// - `400 Bad Request` → `{ "errors": [...] }`, one entry per invalid field
/// - `404 Not Found` → `{ "msg": "Post not found" }` or `{ "msg": "User not found" }`
/// - `500 Internal Server Error` → `Server Error`
///
/// A "New comment" email is sent in the background once the comment is
/// stored. Its outcome never changes the response.
pub async fn create_comment(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    SanitizedJson(req): SanitizedJson<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentModel>), ApiError> {
    req.check().map_err(ApiError::Validation)?;

    let db = app_state.db();

    let author = UserModel::find_profile(db, claims.sub)
        .await?
        .ok_or(ApiError::NotFound("User not found"))?;

    let post = match req.post_id() {
        Some(id) => PostModel::get_by_id(db, id).await?,
        None => None,
    }
    .ok_or(ApiError::NotFound("Post not found"))?;

    let comment = CommentModel::create(
        db,
        post.id,
        author.id,
        &clean_text(&req.content),
        &clean_text(&author.name),
        &clean_text(&author.avatar),
    )
    .await?;

    tracing::info!(
        comment_id = comment.id,
        post_id = post.id,
        user_id = author.id,
        "Comment created"
    );

    // Fire-and-forget: the handle is dropped and the response does not wait.
    let _ = app_state.notifier().notify_new_comment();

    Ok((StatusCode::CREATED, Json(comment)))
}
