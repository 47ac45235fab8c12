use std::cell::RefCell;
use std::rc::Rc;

use alkify_api::{tracks, AbortHandle, ApiClient};
use alkify_types::TrackRequest;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use wasm_bindgen_futures::spawn_local;

use crate::components::media::AudioPlayer;
use crate::components::toast::ToastContext;

/// Reached from `/albums/:album_id/tracks/new` (create, audio file
/// required) and `/tracks/:track_id/edit` (edit, audio optional).
#[component]
pub fn TrackFormPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let toast = expect_context::<ToastContext>();
    let navigate = use_navigate();

    let params = use_params_map();
    let albumId = params.with_untracked(|p| p.get("album_id").and_then(|v| v.parse::<i64>().ok()));
    let trackId = params.with_untracked(|p| p.get("track_id").and_then(|v| v.parse::<i64>().ok()));

    let (title, setTitle) = signal(String::new());
    let (genre, setGenre) = signal(String::new());
    let (isExplicit, setIsExplicit) = signal(false);
    let (existingAudio, setExistingAudio) = signal(Option::<String>::None);
    // Where to land after a successful save; on edit this is the track's
    // album, learned from the fetched DTO.
    let (targetAlbum, setTargetAlbum) = signal(albumId);
    let (loading, setLoading) = signal(false);
    let (error, setError) = signal(String::new());

    let audioFile: Rc<RefCell<Option<web_sys::File>>> = Rc::new(RefCell::new(None));

    let guard = AbortHandle::new();
    {
        let guard = guard.clone();
        on_cleanup(move || guard.abort());
    }

    if let Some(id) = trackId {
        let client = client.clone();
        spawn_local(async move {
            match tracks::get(&client, id).await {
                Ok(track) => {
                    if guard.is_aborted() {
                        return;
                    }
                    setTitle.set(track.title);
                    setGenre.set(track.genre);
                    setIsExplicit.set(track.is_explicit);
                    setExistingAudio.set(Some(track.audio_url));
                    setTargetAlbum.set(Some(track.album.id));
                }
                Err(err) => {
                    if guard.is_aborted() {
                        return;
                    }
                    setError.set(format!("Failed to load track data: {err}"));
                }
            }
        });
    }

    let handleFile = {
        let audioFile = audioFile.clone();
        move |ev: leptos::ev::Event| {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            if let Some(file) = input.files().and_then(|list| list.get(0)) {
                *audioFile.borrow_mut() = Some(file);
            }
        }
    };

    let handleSubmit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        let file = audioFile.borrow().clone();
        // On create the audio file is required
        if trackId.is_none() && file.is_none() {
            setError.set("Please select an audio file".to_string());
            return;
        }

        let genreValue = genre.get_untracked();
        let request = TrackRequest {
            title: title.get_untracked(),
            genre: (!genreValue.is_empty()).then_some(genreValue),
            is_explicit: isExplicit.get_untracked(),
        };

        setLoading.set(true);
        setError.set(String::new());

        let client = client.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = match (trackId, albumId, file) {
                (Some(id), _, file) => tracks::update(&client, id, &request, file.as_ref()).await,
                (None, Some(album), Some(file)) => {
                    tracks::create(&client, album, &request, &file).await
                }
                _ => {
                    setLoading.set(false);
                    setError.set("No album selected for the new track".to_string());
                    return;
                }
            };
            setLoading.set(false);
            match result {
                Ok(track) => {
                    toast.success(if trackId.is_some() {
                        "Track updated"
                    } else {
                        "Track created"
                    });
                    let target = targetAlbum
                        .get_untracked()
                        .map(|id| format!("/albums/{id}"))
                        .unwrap_or_else(|| format!("/tracks/{}", track.id));
                    navigate(&target, Default::default());
                }
                Err(err) => {
                    setError.set(if trackId.is_some() {
                        format!("Failed to update track: {err}")
                    } else {
                        format!("Failed to create track: {err}")
                    });
                }
            }
        });
    };

    view! {
        <div class="form-card">
            <div class="form-card-header">
                <h1>{if trackId.is_some() { "Edit Track" } else { "Add New Track" }}</h1>
                <p>
                    {if trackId.is_some() {
                        "Update track details"
                    } else {
                        "Fill in the track details"
                    }}
                </p>
            </div>

            {move || {
                let message = error.get();
                (!message.is_empty()).then(|| view! { <div class="error-banner">{message}</div> })
            }}

            <form on:submit=handleSubmit>
                <div class="form-group">
                    <label for="track-title">"Title"</label>
                    <input
                        type="text"
                        id="track-title"
                        prop:value=title
                        on:input=move |ev| setTitle.set(event_target_value(&ev))
                        required
                    />
                </div>
                <div class="form-group">
                    <label for="track-genre">"Genre"</label>
                    <input
                        type="text"
                        id="track-genre"
                        prop:value=genre
                        on:input=move |ev| setGenre.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group form-group-inline">
                    <input
                        type="checkbox"
                        id="track-explicit"
                        prop:checked=isExplicit
                        on:change=move |ev| setIsExplicit.set(event_target_checked(&ev))
                    />
                    <label for="track-explicit">"Explicit content"</label>
                </div>
                <div class="form-group">
                    <label>"Audio file"</label>
                    {move || {
                        existingAudio
                            .get()
                            .map(|audio| {
                                view! {
                                    <div class="existing-audio">
                                        <span class="form-hint">"Current audio:"</span>
                                        <AudioPlayer audio=audio />
                                    </div>
                                }
                            })
                    }}
                    <input type="file" accept="audio/*" on:change=handleFile />
                </div>
                <button type="submit" class="btn btn-primary" disabled=loading>
                    {move || {
                        if loading.get() {
                            "Saving..."
                        } else if trackId.is_some() {
                            "Update Track"
                        } else {
                            "Add Track"
                        }
                    }}
                </button>
            </form>
        </div>
    }
}
