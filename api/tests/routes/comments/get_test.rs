#[cfg(test)]
mod tests {
    use crate::helpers::{bearer, make_test_app, read_json};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::{DateTime, Utc};
    use db::models::{
        comment::Model as CommentModel, post::Model as PostModel, user::Model as UserModel,
    };
    use sea_orm::ConnectionTrait;
    use tower::ServiceExt;

    fn list_request(auth: Option<String>) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri("/api/comments");
        if let Some(auth) = auth {
            builder = builder.header("Authorization", auth);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn lists_comments_newest_first() {
        let (app, app_state) = make_test_app().await;
        let db = app_state.db();

        let user = UserModel::create(db, "Ada", "ada@example.com", "https://img/ada.png", "pw")
            .await
            .unwrap();
        let post = PostModel::create(db, "First post").await.unwrap();
        for content in ["one", "two", "three"] {
            CommentModel::create(db, post.id, user.id, content, "Ada", "https://img/ada.png")
                .await
                .unwrap();
        }

        let response = app.oneshot(list_request(Some(bearer(user.id)))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = read_json(response).await;
        let items = json.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["content"], "three");
        assert_eq!(items[2]["content"], "one");

        let stamps: Vec<DateTime<Utc>> = items
            .iter()
            .map(|c| c["createdAt"].as_str().unwrap().parse().unwrap())
            .collect();
        assert!(stamps.windows(2).all(|w| w[0] >= w[1]));
    }

    #[tokio::test]
    async fn empty_store_returns_empty_array() {
        let (app, _) = make_test_app().await;

        let response = app.oneshot(list_request(Some(bearer(1)))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn requires_a_token() {
        let (app, _) = make_test_app().await;

        let response = app.oneshot(list_request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            read_json(response).await["msg"],
            "No token, authorization denied"
        );
    }

    #[tokio::test]
    async fn rejects_a_forged_token() {
        let (app, _) = make_test_app().await;

        let response = app
            .oneshot(list_request(Some("Bearer not.a.jwt".into())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(read_json(response).await["msg"], "Token is not valid");
    }

    #[tokio::test]
    async fn storage_failure_is_an_opaque_server_error() {
        let (app, app_state) = make_test_app().await;
        app_state
            .db()
            .execute_unprepared("DROP TABLE comments")
            .await
            .unwrap();

        let response = app.oneshot(list_request(Some(bearer(1)))).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Server Error");
    }
}
