use api::{
    auth::{generate_jwt, middleware::log_request},
    routes::routes,
    services::email::{MailTransport, Notifier},
    state::AppState,
};
use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::from_fn,
    response::Response,
};
use std::{convert::Infallible, sync::Arc};
use tower::ServiceExt;
use tower::util::BoxCloneService;
use util::config::AppConfig;

use super::mail::RecordingTransport;

pub const TEST_SECRET: &str = "comments-test-secret";

pub type TestApp = BoxCloneService<Request<Body>, Response, Infallible>;

/// App over a fresh in-memory database with mail captured in memory.
pub async fn make_test_app() -> (TestApp, AppState) {
    make_test_app_with(Arc::new(RecordingTransport::default())).await
}

pub async fn make_test_app_with(transport: Arc<dyn MailTransport>) -> (TestApp, AppState) {
    AppConfig::set_jwt_secret(TEST_SECRET);

    let db = db::test_utils::setup_test_db().await;
    let notifier = Notifier::new(transport, "Blogly", "noreply@blogly.dev", "ops@blogly.dev");
    let app_state = AppState::new(db, notifier);

    let router = Router::new()
        .nest("/api", routes(app_state.clone()))
        .layer(from_fn(log_request));

    (router.into_service().boxed_clone(), app_state)
}

pub fn bearer(user_id: i64) -> String {
    AppConfig::set_jwt_secret(TEST_SECRET);
    let (token, _) = generate_jwt(user_id).unwrap();
    format!("Bearer {token}")
}

pub async fn read_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
