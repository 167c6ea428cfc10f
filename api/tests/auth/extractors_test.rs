#[cfg(test)]
mod tests {
    use crate::helpers::app::TEST_SECRET;
    use api::{
        auth::claims::{AuthUser, Claims},
        error::ApiError,
    };
    use axum::{extract::FromRequestParts, http::Request};
    use jsonwebtoken::{EncodingKey, Header, encode};
    use std::time::{SystemTime, UNIX_EPOCH};
    use util::config::AppConfig;

    fn now() -> usize {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs() as usize
    }

    fn token(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    async fn extract(auth_header: Option<String>) -> Result<AuthUser, ApiError> {
        AppConfig::set_jwt_secret(TEST_SECRET);

        let mut builder = Request::builder();
        if let Some(value) = auth_header {
            builder = builder.header("Authorization", value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        AuthUser::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn valid_token_yields_claims() {
        let claims = Claims { sub: 7, exp: now() + 3600 };
        let user = extract(Some(format!("Bearer {}", token(&claims, TEST_SECRET))))
            .await
            .unwrap();
        assert_eq!(user.0.sub, 7);
    }

    #[tokio::test]
    async fn wrong_secret_is_rejected() {
        let claims = Claims { sub: 7, exp: now() + 3600 };
        let err = extract(Some(format!("Bearer {}", token(&claims, "other"))))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized("Token is not valid")));
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let claims = Claims { sub: 7, exp: now() - 3600 };
        let err = extract(Some(format!("Bearer {}", token(&claims, TEST_SECRET))))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized("Token is not valid")));
    }

    #[tokio::test]
    async fn missing_header_is_rejected() {
        let err = extract(None).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Unauthorized("No token, authorization denied")
        ));
    }

    #[tokio::test]
    async fn non_bearer_scheme_is_rejected() {
        let err = extract(Some("Basic dXNlcjpwYXNz".into())).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Unauthorized("No token, authorization denied")
        ));
    }
}
