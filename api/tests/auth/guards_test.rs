#[cfg(test)]
mod tests {
    use crate::helpers::bearer;
    use api::auth::{AuthUser, guards::allow_authenticated};
    use axum::{
        Extension, Router,
        body::Body,
        http::{Request, StatusCode},
        middleware::from_fn,
        routing::get,
    };
    use tower::ServiceExt;

    fn guarded() -> Router {
        Router::new()
            .route(
                "/whoami",
                get(|Extension(AuthUser(claims)): Extension<AuthUser>| async move {
                    claims.sub.to_string()
                }),
            )
            .route_layer(from_fn(allow_authenticated))
    }

    #[tokio::test]
    async fn authenticated_request_reaches_handler_with_identity() {
        let req = Request::builder()
            .uri("/whoami")
            .header("Authorization", bearer(42))
            .body(Body::empty())
            .unwrap();

        let response = guarded().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"42");
    }

    #[tokio::test]
    async fn anonymous_request_is_stopped() {
        let req = Request::builder()
            .uri("/whoami")
            .body(Body::empty())
            .unwrap();

        let response = guarded().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
