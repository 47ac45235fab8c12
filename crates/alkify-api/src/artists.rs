use alkify_types::{ArtistDto, ArtistRequest};

use crate::client::{json_multipart, ApiClient};
use crate::error::ApiError;

/// Multipart field name the server expects the JSON part under.
const JSON_PART: &str = "artistRequest";

pub async fn list(client: &ApiClient) -> Result<Vec<ArtistDto>, ApiError> {
    client.get_json("artists").await
}

pub async fn get(client: &ApiClient, id: i64) -> Result<ArtistDto, ApiError> {
    client.get_json(&format!("artists/{id}")).await
}

pub async fn search(client: &ApiClient, name: &str) -> Result<Vec<ArtistDto>, ApiError> {
    client
        .get_json_with_query("artists/search", &[("name", name)])
        .await
}

pub async fn create(
    client: &ApiClient,
    request: &ArtistRequest,
    image: Option<&web_sys::File>,
) -> Result<ArtistDto, ApiError> {
    let form = json_multipart(JSON_PART, request, image.map(|f| ("image", f)))?;
    client.post_multipart("artists", form).await
}

pub async fn update(
    client: &ApiClient,
    id: i64,
    request: &ArtistRequest,
    image: Option<&web_sys::File>,
) -> Result<ArtistDto, ApiError> {
    let form = json_multipart(JSON_PART, request, image.map(|f| ("image", f)))?;
    client.put_multipart(&format!("artists/{id}"), form).await
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("artists/{id}")).await
}
