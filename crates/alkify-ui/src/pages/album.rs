use std::sync::{Arc, Mutex};

use alkify_api::{albums, tracks, AbortHandle, ApiClient};
use alkify_types::{capabilities, AlbumDto, Resource};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use wasm_bindgen_futures::spawn_local;

use crate::app::CurrentUser;
use crate::components::media::{Artwork, AudioPlayer};
use crate::components::toast::ToastContext;
use crate::format::release_year;

fn confirm(message: &str) -> bool {
    window().confirm_with_message(message).unwrap_or(false)
}

#[component]
pub fn AlbumPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let currentUser = expect_context::<CurrentUser>();
    let toast = expect_context::<ToastContext>();
    let navigate = use_navigate();

    let params = use_params_map();
    let albumId =
        Memo::new(move |_| params.with(|p| p.get("album_id").and_then(|v| v.parse::<i64>().ok())));

    let (album, setAlbum) = signal(Option::<Result<AlbumDto, String>>::None);

    let guard: Arc<Mutex<AbortHandle>> = Arc::new(Mutex::new(AbortHandle::new()));
    {
        let guard = guard.clone();
        on_cleanup(move || {
            if let Ok(handle) = guard.lock() {
                handle.abort();
            }
        });
    }

    {
        let client = client.clone();
        Effect::new(move |_| {
            let Some(id) = albumId.get() else {
                setAlbum.set(Some(Err("Album not found".to_string())));
                return;
            };

            let handle = AbortHandle::new();
            if let Ok(mut current) = guard.lock() {
                current.abort();
                *current = handle.clone();
            }
            setAlbum.set(None);

            let client = client.clone();
            spawn_local(async move {
                let result = albums::get(&client, id).await.map_err(|e| e.to_string());
                if handle.is_aborted() {
                    return;
                }
                setAlbum.set(Some(result));
            });
        });
    }

    let deleteAlbumClient = client.clone();
    let deleteAlbumNavigate = navigate.clone();
    let handleDeleteAlbum = move |_| {
        if !confirm("Are you sure you want to delete this album? This action cannot be undone!") {
            return;
        }
        let Some(id) = albumId.get_untracked() else {
            return;
        };
        let client = deleteAlbumClient.clone();
        let navigate = deleteAlbumNavigate.clone();
        spawn_local(async move {
            match albums::delete(&client, id).await {
                Ok(()) => {
                    toast.success("Album deleted");
                    navigate("/profile", Default::default());
                }
                Err(err) => toast.error(format!("Failed to delete album: {err}")),
            }
        });
    };

    // Optimistic removal: the deleted track leaves the rendered list
    // without reloading the album.
    let deleteTrackClient = client.clone();
    let handleDeleteTrack = move |trackId: i64| {
        if !confirm("Are you sure you want to delete this track?") {
            return;
        }
        let client = deleteTrackClient.clone();
        spawn_local(async move {
            match tracks::delete(&client, trackId).await {
                Ok(()) => {
                    setAlbum.update(|state| {
                        if let Some(Ok(album)) = state.as_mut() {
                            album.remove_track(trackId);
                        }
                    });
                }
                Err(err) => toast.error(format!("Failed to delete track: {err}")),
            }
        });
    };

    view! {
        {move || {
            let handleDeleteAlbum = handleDeleteAlbum.clone();
            let handleDeleteTrack = handleDeleteTrack.clone();
            let navigate = navigate.clone();
            match album.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Loading album..."
                        </div>
                    }
                        .into_any()
                }
                Some(Err(e)) => {
                    view! { <p class="error-banner">"Failed to load album data: " {e}</p> }
                        .into_any()
                }
                Some(Ok(album)) => {
                    let caps = capabilities(currentUser.get().as_ref(), Resource::Album(&album));
                    let albumId = album.id;
                    let title = album.title.clone();
                    let trackCount = album.tracks.len();

                    let addTrackNavigate = navigate.clone();
                    let editNavigate = navigate;

                    view! {
                        <div class="album-header">
                            <Artwork
                                image=album.image_url.clone()
                                alt=title.clone()
                                class="album-cover-lg"
                            />
                            <div class="album-meta">
                                <h1>{title}</h1>
                                <div class="album-artists">
                                    {album
                                        .artists
                                        .iter()
                                        .map(|artist| {
                                            view! {
                                                <a
                                                    href=format!("/artists/{}", artist.id)
                                                    class="artist-link"
                                                >
                                                    <Artwork
                                                        image=artist.image_url.clone()
                                                        alt=artist.artist_name.clone()
                                                        class="artist-portrait-sm"
                                                    />
                                                    <span>{artist.artist_name.clone()}</span>
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                <p class="album-description">{album.description.clone()}</p>
                                <p class="album-year">
                                    "Released: " {release_year(album.release_date)}
                                </p>
                                {caps
                                    .edit
                                    .then(|| {
                                        let handleDeleteAlbum = handleDeleteAlbum.clone();
                                        let addTrack = addTrackNavigate.clone();
                                        let edit = editNavigate.clone();
                                        view! {
                                            <div class="album-actions">
                                                <button
                                                    class="btn btn-primary"
                                                    on:click=move |_| {
                                                        addTrack(
                                                            &format!("/albums/{albumId}/tracks/new"),
                                                            Default::default(),
                                                        )
                                                    }
                                                >
                                                    "Add Track"
                                                </button>
                                                <button
                                                    class="btn btn-primary"
                                                    on:click=move |_| {
                                                        edit(
                                                            &format!("/albums/{albumId}/edit"),
                                                            Default::default(),
                                                        )
                                                    }
                                                >
                                                    "Edit Album"
                                                </button>
                                                <button class="btn btn-danger" on:click=handleDeleteAlbum>
                                                    "Delete Album"
                                                </button>
                                            </div>
                                        }
                                    })}
                            </div>
                        </div>

                        <section class="detail-section">
                            <h2>"Tracks"</h2>
                            {if trackCount == 0 {
                                view! { <p class="empty-hint">"No tracks yet"</p> }.into_any()
                            } else {
                                album
                                    .tracks
                                    .iter()
                                    .enumerate()
                                    .map(|(index, track)| {
                                        let trackId = track.id;
                                        let handleDeleteTrack = handleDeleteTrack.clone();
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
                                                </div>
                                                <AudioPlayer audio=track.audio_url.clone() />
                                                {caps
                                                    .delete
                                                    .then(|| {
                                                        view! {
                                                            <button
                                                                class="btn btn-ghost btn-sm"
                                                                on:click=move |_| handleDeleteTrack(trackId)
                                                            >
                                                                "Delete"
                                                            </button>
                                                        }
                                                    })}
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </section>
                    }
                        .into_any()
                }
            }
        }}
    }
}
