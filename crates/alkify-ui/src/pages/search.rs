use std::sync::{Arc, Mutex};

use alkify_api::{albums, artists, tracks, AbortHandle, ApiClient};
use alkify_types::{AlbumDto, ArtistDto, TrackDto};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use wasm_bindgen_futures::spawn_local;

use crate::components::media::{Artwork, AudioPlayer};

/// "No results" renders only when every lookup resolved with an empty
/// list; a failed lookup never counts as empty.
fn all_resolved_empty<A, B, C>(
    artists: &Result<Vec<A>, String>,
    albums: &Result<Vec<B>, String>,
    tracks: &Result<Vec<C>, String>,
) -> bool {
    matches!(artists, Ok(list) if list.is_empty())
        && matches!(albums, Ok(list) if list.is_empty())
        && matches!(tracks, Ok(list) if list.is_empty())
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let query = use_query_map();
    let searchQuery = Memo::new(move |_| query.with(|q| q.get("q").unwrap_or_default()));

    let (artistResults, setArtistResults) = signal(Option::<Result<Vec<ArtistDto>, String>>::None);
    let (albumResults, setAlbumResults) = signal(Option::<Result<Vec<AlbumDto>, String>>::None);
    let (trackResults, setTrackResults) = signal(Option::<Result<Vec<TrackDto>, String>>::None);

    // One abort handle per issued query; superseded and unmounted
    // lookups never touch the result signals.
    let guard: Arc<Mutex<AbortHandle>> = Arc::new(Mutex::new(AbortHandle::new()));
    {
        let guard = guard.clone();
        on_cleanup(move || {
            if let Ok(handle) = guard.lock() {
                handle.abort();
            }
        });
    }

    Effect::new(move |_| {
        let q = searchQuery.get();

        let handle = AbortHandle::new();
        if let Ok(mut current) = guard.lock() {
            current.abort();
            *current = handle.clone();
        }

        setArtistResults.set(None);
        setAlbumResults.set(None);
        setTrackResults.set(None);

        if q.trim().is_empty() {
            setArtistResults.set(Some(Ok(Vec::new())));
            setAlbumResults.set(Some(Ok(Vec::new())));
            setTrackResults.set(Some(Ok(Vec::new())));
            return;
        }

        // Three concurrent lookups, each applied independently as it resolves
        {
            let client = client.clone();
            let handle = handle.clone();
            let q = q.clone();
            spawn_local(async move {
                let result = artists::search(&client, &q).await.map_err(|e| e.to_string());
                if handle.is_aborted() {
                    return;
                }
                setArtistResults.set(Some(result));
            });
        }
        {
            let client = client.clone();
            let handle = handle.clone();
            let q = q.clone();
            spawn_local(async move {
                let result = albums::search(&client, &q).await.map_err(|e| e.to_string());
                if handle.is_aborted() {
                    return;
                }
                setAlbumResults.set(Some(result));
            });
        }
        {
            let client = client.clone();
            spawn_local(async move {
                let result = tracks::search(&client, &q).await.map_err(|e| e.to_string());
                if handle.is_aborted() {
                    return;
                }
                setTrackResults.set(Some(result));
            });
        }
    });

    view! {
        <div class="page-header">
            <h1>"Search results for: \"" {move || searchQuery.get()} "\""</h1>
        </div>
        {move || {
            let (Some(artistsRes), Some(albumsRes), Some(tracksRes)) =
                (artistResults.get(), albumResults.get(), trackResults.get())
            else {
                return view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        "Searching..."
                    </div>
                }
                    .into_any();
            };

            let anyError =
                artistsRes.is_err() || albumsRes.is_err() || tracksRes.is_err();
            let noResults = all_resolved_empty(&artistsRes, &albumsRes, &tracksRes);

            let artistList = artistsRes.unwrap_or_default();
            let albumList = albumsRes.unwrap_or_default();
            let trackList = tracksRes.unwrap_or_default();

            view! {
                {anyError
                    .then(|| {
                        view! {
                            <p class="error-banner">"Failed to load search results"</p>
                        }
                    })}
                {noResults
                    .then(|| {
                        view! {
                            <div class="empty-state">
                                <p>"No results found"</p>
                                <p class="empty-hint">"Try different search terms"</p>
                            </div>
                        }
                    })}

                {(!artistList.is_empty())
                    .then(|| {
                        view! {
                            <section class="search-section">
                                <h2>"Artists"</h2>
                                <div class="tile-grid">
                                    {artistList
                                        .clone()
                                        .into_iter()
                                        .map(|artist| {
                                            view! {
                                                <a
                                                    href=format!("/artists/{}", artist.id)
                                                    class="artist-tile"
                                                >
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
                            </section>
                        }
                    })}

                {(!albumList.is_empty())
                    .then(|| {
                        view! {
                            <section class="search-section">
                                <h2>"Albums"</h2>
                                <div class="tile-grid">
                                    {albumList
                                        .clone()
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
                            </section>
                        }
                    })}

                {(!trackList.is_empty())
                    .then(|| {
                        view! {
                            <section class="search-section">
                                <h2>"Tracks"</h2>
                                <div class="track-list">
                                    {trackList
                                        .clone()
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, track)| {
                                            let artistName = track
                                                .artists
                                                .first()
                                                .map(|a| a.artist_name.clone())
                                                .unwrap_or_else(|| "Unknown artist".to_string());
                                            let subtitle = format!(
                                                "{artistName} \u{2022} {}",
                                                track.album.title,
                                            );
                                            view! {
                                                <div class="track-row">
                                                    <span class="track-index">{index + 1}</span>
                                                    <div class="track-info">
                                                        <a
                                                            href=format!("/tracks/{}", track.id)
                                                            class="track-title"
                                                        >
                                                            {track.title.clone()}
                                                            {track
                                                                .is_explicit
                                                                .then(|| {
                                                                    view! {
                                                                        <span class="explicit-badge">"EXPLICIT"</span>
                                                                    }
                                                                })}
                                                        </a>
                                                        <p class="track-subtitle">{subtitle}</p>
                                                    </div>
                                                    <AudioPlayer audio=track.audio_url.clone() />
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </section>
                        }
                    })}
            }
                .into_any()
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::all_resolved_empty;

    fn empty() -> Result<Vec<u8>, String> {
        Ok(Vec::new())
    }

    #[test]
    fn no_results_requires_all_three_lookups_empty() {
        assert!(all_resolved_empty(&empty(), &empty(), &empty()));
        assert!(!all_resolved_empty(&Ok(vec![1u8]), &empty(), &empty()));
        assert!(!all_resolved_empty(&empty(), &empty(), &Ok(vec![1u8])));
    }

    #[test]
    fn failed_lookup_never_counts_as_empty() {
        let failed: Result<Vec<u8>, String> = Err("network error".into());
        assert!(!all_resolved_empty(&failed, &empty(), &empty()));
        assert!(!all_resolved_empty(&empty(), &failed, &empty()));
    }
}
