use alkify_types::{AlbumDto, AlbumRequest};

use crate::client::{json_multipart, ApiClient};
use crate::error::ApiError;

const JSON_PART: &str = "request";

pub async fn list(client: &ApiClient) -> Result<Vec<AlbumDto>, ApiError> {
    client.get_json("albums").await
}

pub async fn get(client: &ApiClient, id: i64) -> Result<AlbumDto, ApiError> {
    client.get_json(&format!("albums/{id}")).await
}

pub async fn search(client: &ApiClient, title: &str) -> Result<Vec<AlbumDto>, ApiError> {
    client
        .get_json_with_query("albums/search", &[("title", title)])
        .await
}

/// Albums are created under the artist that releases them.
pub async fn create(
    client: &ApiClient,
    artist_id: i64,
    request: &AlbumRequest,
    image: Option<&web_sys::File>,
) -> Result<AlbumDto, ApiError> {
    let form = json_multipart(JSON_PART, request, image.map(|f| ("image", f)))?;
    client
        .post_multipart(&format!("albums/{artist_id}"), form)
        .await
}

pub async fn update(
    client: &ApiClient,
    id: i64,
    request: &AlbumRequest,
    image: Option<&web_sys::File>,
) -> Result<AlbumDto, ApiError> {
    let form = json_multipart(JSON_PART, request, image.map(|f| ("image", f)))?;
    client.put_multipart(&format!("albums/{id}"), form).await
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("albums/{id}")).await
}
