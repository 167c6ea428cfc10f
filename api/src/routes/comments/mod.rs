use axum::{Router, routing::get};

use crate::state::AppState;

pub mod common;
pub mod get;
pub mod post;

use get::get_comments;
use post::create_comment;

pub fn comment_routes() -> Router<AppState> {
    Router::new().route("/", get(get_comments).post(create_comment))
}
