use alkify_api::{albums, artists, tracks, AbortHandle, ApiClient};
use alkify_types::{AlbumDto, ArtistDto, TrackDto};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::media::{Artwork, AudioPlayer};

#[component]
pub fn HomePage() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    // Three independent lists, each applied as its own request resolves.
    let (artistList, setArtistList) = signal(Option::<Result<Vec<ArtistDto>, String>>::None);
    let (albumList, setAlbumList) = signal(Option::<Result<Vec<AlbumDto>, String>>::None);
    let (trackList, setTrackList) = signal(Option::<Result<Vec<TrackDto>, String>>::None);

    let guard = AbortHandle::new();
    {
        let guard = guard.clone();
        on_cleanup(move || guard.abort());
    }

    {
        let client = client.clone();
        let guard = guard.clone();
        spawn_local(async move {
            let result = artists::list(&client).await.map_err(|e| e.to_string());
            if guard.is_aborted() {
                return;
            }
            setArtistList.set(Some(result));
        });
    }
    {
        let client = client.clone();
        let guard = guard.clone();
        spawn_local(async move {
            let result = albums::list(&client).await.map_err(|e| e.to_string());
            if guard.is_aborted() {
                return;
            }
            setAlbumList.set(Some(result));
        });
    }
    {
        let client = client.clone();
        spawn_local(async move {
            let result = tracks::list(&client).await.map_err(|e| e.to_string());
            if guard.is_aborted() {
                return;
            }
            setTrackList.set(Some(result));
        });
    }

    view! {
        <section class="home-section">
            <h2>"Popular Artists"</h2>
            {move || match artistList.get() {
                None => view! { <div class="loading"><div class="spinner"></div></div> }.into_any(),
                Some(Err(e)) => {
                    view! { <p class="error-banner">"Failed to load artists: " {e}</p> }.into_any()
                }
                Some(Ok(list)) => {
                    view! {
                        <div class="artist-row">
                            {list
                                .into_iter()
                                .map(|artist| {
                                    view! {
                                        <a href=format!("/artists/{}", artist.id) class="artist-tile">
                                            <Artwork
                                                image=artist.image_url
                                                alt=artist.artist_name.clone()
                                                class="artist-portrait"
                                            />
                                            <p>{artist.artist_name}</p>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>

        <section class="home-section">
            <h2>"Popular Albums"</h2>
            {move || match albumList.get() {
                None => view! { <div class="loading"><div class="spinner"></div></div> }.into_any(),
                Some(Err(e)) => {
                    view! { <p class="error-banner">"Failed to load albums: " {e}</p> }.into_any()
                }
                Some(Ok(list)) => {
                    view! {
                        <div class="album-row">
                            {list
                                .into_iter()
                                .map(|album| {
                                    let artistName = album
                                        .artists
                                        .first()
                                        .map(|a| a.artist_name.clone())
                                        .unwrap_or_else(|| "Various artists".to_string());
                                    view! {
                                        <a href=format!("/albums/{}", album.id) class="album-tile">
                                            <Artwork
                                                image=album.image_url
                                                alt=album.title.clone()
                                                class="album-cover"
                                            />
                                            <p class="album-title">{album.title}</p>
                                            <p class="album-artist">{artistName}</p>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>

        <section class="home-section">
            <h2>"Popular Tracks"</h2>
            {move || match trackList.get() {
                None => view! { <div class="loading"><div class="spinner"></div></div> }.into_any(),
                Some(Err(e)) => {
                    view! { <p class="error-banner">"Failed to load tracks: " {e}</p> }.into_any()
                }
                Some(Ok(list)) => {
                    view! {
                        <div class="track-list">
                            {list
                                .into_iter()
                                .enumerate()
                                .map(|(index, track)| {
                                    let artistName = track
                                        .artists
                                        .first()
                                        .map(|a| a.artist_name.clone())
                                        .unwrap_or_else(|| "Unknown artist".to_string());
                                    let subtitle = format!("{artistName} \u{2022} {}", track.album.title);
                                    view! {
                                        <div class="track-row">
                                            <Artwork
                                                image=track.album.image_url.clone()
                                                alt=track.album.title.clone()
                                                class="track-cover"
                                            />
                                            <span class="track-index">{index + 1}</span>
                                            <div class="track-info">
                                                <a href=format!("/tracks/{}", track.id) class="track-title">
                                                    {track.title.clone()}
                                                </a>
                                                <p class="track-subtitle">{subtitle}</p>
                                            </div>
                                            <AudioPlayer audio=track.audio_url.clone() />
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
