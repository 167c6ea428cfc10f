use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Id of the authenticated user.
    pub sub: i64,
    pub exp: usize,
}

/// The caller's verified identity, inserted into request extensions by
/// [`crate::auth::guards::allow_authenticated`].
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);
