use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::config::Config;
use crate::error::ApiError;
use crate::session::Session;

/// Shared HTTP pipeline. Every outbound request passes through one
/// cross-cutting step: when the session holds a token, the request gains
/// an `Authorization: Bearer <token>` header. There is no response
/// interception, no retry, no timeout policy; failures propagate to the
/// caller as `ApiError`.
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    session: Session,
}

impl ApiClient {
    pub fn new(config: Config, session: Session) -> Self {
        Self {
            base: config.api_base,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Header value attached to outbound requests, if any.
    pub fn authorization(&self) -> Option<String> {
        self.session.token().map(|token| format!("Bearer {token}"))
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// Static media served by the API next to the JSON endpoints.
    pub fn image_url(&self, name: &str) -> String {
        self.url(&format!("files/images/{name}"))
    }

    pub fn audio_url(&self, name: &str) -> String {
        self.url(&format!("files/audios/{name}"))
    }

    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.authorization() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .with_auth(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(ApiError::from)?;
        Self::decode(response).await
    }

    pub(crate) async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let response = self
            .with_auth(Request::get(&self.url(path)).query(params.iter().copied()))
            .send()
            .await
            .map_err(ApiError::from)?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .with_auth(Request::post(&self.url(path)))
            .json(body)
            .map_err(ApiError::from)?
            .send()
            .await
            .map_err(ApiError::from)?;
        Self::decode(response).await
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .with_auth(Request::put(&self.url(path)))
            .json(body)
            .map_err(ApiError::from)?
            .send()
            .await
            .map_err(ApiError::from)?;
        Self::decode(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .with_auth(Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(ApiError::from)?;
        Self::check(response).await.map(|_| ())
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: web_sys::FormData,
    ) -> Result<T, ApiError> {
        let response = self
            .with_auth(Request::post(&self.url(path)))
            .body(form)
            .map_err(ApiError::from)?
            .send()
            .await
            .map_err(ApiError::from)?;
        Self::decode(response).await
    }

    pub(crate) async fn put_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: web_sys::FormData,
    ) -> Result<T, ApiError> {
        let response = self
            .with_auth(Request::put(&self.url(path)))
            .body(form)
            .map_err(ApiError::from)?
            .send()
            .await
            .map_err(ApiError::from)?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::check(response).await?;
        response.json::<T>().await.map_err(ApiError::from)
    }

    async fn check(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        if status == 401 {
            return Err(ApiError::Unauthorized);
        }
        let status_text = response.status_text();
        let message = match response.text().await {
            Ok(body) if !body.is_empty() => body,
            _ => status_text,
        };
        Err(ApiError::Status { status, message })
    }
}

/// Multipart body for create/update endpoints: one JSON blob part plus an
/// optional file part. The content type of the request itself is left to
/// the browser so it can set the multipart boundary.
pub(crate) fn json_multipart<B: Serialize>(
    part_name: &str,
    body: &B,
    file: Option<(&str, &web_sys::File)>,
) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new().map_err(ApiError::from_js)?;

    let json = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let parts = js_sys::Array::of1(&JsValue::from_str(&json));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(ApiError::from_js)?;
    form.append_with_blob(part_name, &blob)
        .map_err(ApiError::from_js)?;

    if let Some((name, file)) = file {
        form.append_with_blob_and_filename(name, file, &file.name())
            .map_err(ApiError::from_js)?;
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(Config::new("http://api.test"), Session::in_memory())
    }

    #[test]
    fn urls_join_against_the_base() {
        let client = client();
        assert_eq!(client.url("auth/login"), "http://api.test/auth/login");
        assert_eq!(client.url("artists/7"), "http://api.test/artists/7");
    }

    #[test]
    fn media_urls_resolve_under_files() {
        let client = client();
        assert_eq!(
            client.image_url("cover.jpg"),
            "http://api.test/files/images/cover.jpg"
        );
        assert_eq!(
            client.audio_url("song.mp3"),
            "http://api.test/files/audios/song.mp3"
        );
    }

    #[test]
    fn authorization_follows_the_stored_token() {
        let client = client();
        assert_eq!(client.authorization(), None);

        client.session().store_token("tok-123");
        assert_eq!(client.authorization().as_deref(), Some("Bearer tok-123"));

        client.session().clear();
        assert_eq!(client.authorization(), None);
    }
}
