use alkify_types::{TrackDto, TrackRequest};

use crate::client::{json_multipart, ApiClient};
use crate::error::ApiError;

const JSON_PART: &str = "request";

pub async fn list(client: &ApiClient) -> Result<Vec<TrackDto>, ApiError> {
    client.get_json("tracks").await
}

pub async fn get(client: &ApiClient, id: i64) -> Result<TrackDto, ApiError> {
    client.get_json(&format!("tracks/{id}")).await
}

pub async fn search(client: &ApiClient, title: &str) -> Result<Vec<TrackDto>, ApiError> {
    client
        .get_json_with_query("tracks/search", &[("title", title)])
        .await
}

/// Tracks are created under their album; the audio file is required on
/// create and optional on update.
pub async fn create(
    client: &ApiClient,
    album_id: i64,
    request: &TrackRequest,
    audio: &web_sys::File,
) -> Result<TrackDto, ApiError> {
    let form = json_multipart(JSON_PART, request, Some(("audio", audio)))?;
    client
        .post_multipart(&format!("albums/{album_id}/tracks"), form)
        .await
}

pub async fn update(
    client: &ApiClient,
    id: i64,
    request: &TrackRequest,
    audio: Option<&web_sys::File>,
) -> Result<TrackDto, ApiError> {
    let form = json_multipart(JSON_PART, request, audio.map(|f| ("audio", f)))?;
    client.put_multipart(&format!("tracks/{id}"), form).await
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("tracks/{id}")).await
}
