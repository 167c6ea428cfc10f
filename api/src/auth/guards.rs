use axum::{
    body::Body,
    extract::FromRequestParts,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::auth::claims::AuthUser;
use crate::error::ApiError;

/// Rejects unauthenticated requests before the handler runs and makes the
/// caller's `AuthUser` available as an `Extension`.
pub async fn allow_authenticated(req: Request<Body>, next: Next) -> Result<Response, ApiError> {
    let (mut parts, body) = req.into_parts();
    let user = AuthUser::from_request_parts(&mut parts, &()).await?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
