//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → liveness probe (public)
//! - `/comments` → list and create comments (authenticated)

use axum::{Router, middleware::from_fn};

use crate::auth::guards::allow_authenticated;
use crate::routes::{comments::comment_routes, health::health_routes};
use crate::state::AppState;

pub mod comments;
pub mod health;

/// Builds the router for every endpoint under `/api`, with state applied.
///
/// `/comments` sits behind `allow_authenticated`, so its handlers can rely
/// on an `Extension<AuthUser>` being present.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest(
            "/comments",
            comment_routes().route_layer(from_fn(allow_authenticated)),
        )
        .with_state(app_state)
}
