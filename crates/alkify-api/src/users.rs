use alkify_types::{UserDto, UserRequest};

use crate::client::ApiClient;
use crate::error::ApiError;

/// Identity probe. Fails with `ApiError::Unauthorized` when no valid
/// token accompanies the request.
pub async fn me(client: &ApiClient) -> Result<UserDto, ApiError> {
    client.get_json("users/me").await
}

pub async fn update(client: &ApiClient, request: &UserRequest) -> Result<UserDto, ApiError> {
    client.put_json("users/", request).await
}
