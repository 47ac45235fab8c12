use alkify_types::{AuthRequest, JwtAuthentication, UserRequest};

use crate::client::ApiClient;
use crate::error::ApiError;

/// Exchanges credentials for a bearer token. The caller is responsible
/// for persisting the token into the session.
pub async fn login(client: &ApiClient, request: &AuthRequest) -> Result<JwtAuthentication, ApiError> {
    client.post_json("auth/login", request).await
}

/// Creates an account and returns a token for the new identity.
pub async fn register(
    client: &ApiClient,
    request: &UserRequest,
) -> Result<JwtAuthentication, ApiError> {
    client.post_json("auth/register", request).await
}
