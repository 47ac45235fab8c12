use alkify_api::ApiClient;
use leptos::prelude::*;

/// Placeholder shown when an entity has no image. Copied by the build
/// into the site root, so the path has no directory prefix.
pub const DEFAULT_IMAGE: &str = "/default-cover.svg";

fn artwork_src(client: &ApiClient, image: Option<&str>) -> String {
    match image {
        Some(name) if !name.is_empty() => client.image_url(name),
        _ => DEFAULT_IMAGE.to_string(),
    }
}

/// Cover or portrait image served by the API, with the placeholder
/// fallback for entities that have none.
#[component]
pub fn Artwork(
    image: Option<String>,
    #[prop(into)] alt: String,
    #[prop(into)] class: String,
) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let src = artwork_src(&client, image.as_deref());

    view! { <img src=src alt=alt class=class /> }
}

/// Inline audio player for a track's stored audio file.
#[component]
pub fn AudioPlayer(#[prop(into)] audio: String) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let src = client.audio_url(&audio);

    view! { <audio src=src controls=true class="audio-player"></audio> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alkify_api::{Config, Session};

    fn client() -> ApiClient {
        ApiClient::new(Config::new("http://api.test"), Session::in_memory())
    }

    #[test]
    fn stored_artwork_resolves_under_the_api() {
        assert_eq!(
            artwork_src(&client(), Some("cover.jpg")),
            "http://api.test/files/images/cover.jpg"
        );
    }

    #[test]
    fn missing_artwork_falls_back_to_the_root_level_placeholder() {
        assert_eq!(artwork_src(&client(), None), DEFAULT_IMAGE);
        assert_eq!(artwork_src(&client(), Some("")), DEFAULT_IMAGE);
        // Served from the site root, not a subdirectory
        assert_eq!(DEFAULT_IMAGE.matches('/').count(), 1);
    }
}
