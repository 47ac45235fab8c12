use std::sync::{Arc, Mutex};

use alkify_api::{tracks, AbortHandle, ApiClient};
use alkify_types::{capabilities, Resource, TrackDto};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use wasm_bindgen_futures::spawn_local;

use crate::app::CurrentUser;
use crate::components::media::{Artwork, AudioPlayer};
use crate::components::toast::ToastContext;
use crate::format::{format_duration, release_year};

#[component]
pub fn TrackPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let currentUser = expect_context::<CurrentUser>();
    let toast = expect_context::<ToastContext>();
    let navigate = use_navigate();

    let params = use_params_map();
    let trackId =
        Memo::new(move |_| params.with(|p| p.get("track_id").and_then(|v| v.parse::<i64>().ok())));

    let (track, setTrack) = signal(Option::<Result<TrackDto, String>>::None);

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
            let Some(id) = trackId.get() else {
                setTrack.set(Some(Err("Track not found".to_string())));
                return;
            };

            let handle = AbortHandle::new();
            if let Ok(mut current) = guard.lock() {
                current.abort();
                *current = handle.clone();
            }
            setTrack.set(None);

            let client = client.clone();
            spawn_local(async move {
                let result = tracks::get(&client, id).await.map_err(|e| e.to_string());
                if handle.is_aborted() {
                    return;
                }
                setTrack.set(Some(result));
            });
        });
    }

    let deleteClient = client.clone();
    let deleteNavigate = navigate.clone();
    let handleDelete = move |trackId: i64, albumId: i64| {
        if !window()
            .confirm_with_message("Are you sure you want to delete this track?")
            .unwrap_or(false)
        {
            return;
        }
        let client = deleteClient.clone();
        let navigate = deleteNavigate.clone();
        spawn_local(async move {
            match tracks::delete(&client, trackId).await {
                Ok(()) => {
                    toast.success("Track deleted");
                    navigate(&format!("/albums/{albumId}"), Default::default());
                }
                Err(err) => toast.error(format!("Failed to delete track: {err}")),
            }
        });
    };

    view! {
        {move || {
            let handleDelete = handleDelete.clone();
            let navigate = navigate.clone();
            match track.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Loading track..."
                        </div>
                    }
                        .into_any()
                }
                Some(Err(e)) => {
                    view! { <p class="error-banner">"Failed to load track data: " {e}</p> }
                        .into_any()
                }
                Some(Ok(track)) => {
                    let caps = capabilities(currentUser.get().as_ref(), Resource::Track(&track));
                    let trackId = track.id;
                    let albumId = track.album.id;

                    view! {
                        <div class="track-header">
                            <Artwork
                                image=track.album.image_url.clone()
                                alt=track.album.title.clone()
                                class="album-cover-lg"
                            />
                            <div class="track-meta">
                                <h1>
                                    {track.title.clone()}
                                    {track
                                        .is_explicit
                                        .then(|| {
                                            view! { <span class="explicit-badge">"EXPLICIT"</span> }
                                        })}
                                </h1>
                                <div class="track-artists">
                                    {track
                                        .artists
                                        .iter()
                                        .map(|artist| {
                                            view! {
                                                <a
                                                    href=format!("/artists/{}", artist.id)
                                                    class="artist-link"
                                                >
                                                    {artist.artist_name.clone()}
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                <p class="track-subtitle">
                                    "From "
                                    <a href=format!("/albums/{}", track.album.id)>
                                        {track.album.title.clone()}
                                    </a>
                                </p>
                                <p class="track-facts">
                                    {track.genre.clone()} " \u{2022} "
                                    {format_duration(track.duration_seconds)} " \u{2022} "
                                    {release_year(track.release_date)} " \u{2022} "
                                    {track.like_count} " likes"
                                </p>
                                <AudioPlayer audio=track.audio_url.clone() />
                                {caps
                                    .edit
                                    .then(|| {
                                        let handleDelete = handleDelete.clone();
                                        let navigate = navigate.clone();
                                        view! {
                                            <div class="track-actions">
                                                <button
                                                    class="btn btn-primary"
                                                    on:click=move |_| {
                                                        navigate(
                                                            &format!("/tracks/{trackId}/edit"),
                                                            Default::default(),
                                                        )
                                                    }
                                                >
                                                    "Edit Track"
                                                </button>
                                                <button
                                                    class="btn btn-danger"
                                                    on:click=move |_| handleDelete(trackId, albumId)
                                                >
                                                    "Delete Track"
                                                </button>
                                            </div>
                                        }
                                    })}
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }
        }}
    }
}
