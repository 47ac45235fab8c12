use std::sync::{Arc, Mutex};

use alkify_api::{artists, AbortHandle, ApiClient};
use alkify_types::{capabilities, ArtistDto, Resource};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use wasm_bindgen_futures::spawn_local;

use crate::app::CurrentUser;
use crate::components::media::Artwork;
use crate::components::toast::ToastContext;
use crate::format::{format_duration, release_year};

#[component]
pub fn ArtistPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let params = use_params_map();
    let artistId =
        Memo::new(move |_| params.with(|p| p.get("artist_id").and_then(|v| v.parse::<i64>().ok())));

    let (artist, setArtist) = signal(Option::<Result<ArtistDto, String>>::None);

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
            let Some(id) = artistId.get() else {
                setArtist.set(Some(Err("Artist not found".to_string())));
                return;
            };

            let handle = AbortHandle::new();
            if let Ok(mut current) = guard.lock() {
                current.abort();
                *current = handle.clone();
            }
            setArtist.set(None);

            let client = client.clone();
            spawn_local(async move {
                let result = artists::get(&client, id).await.map_err(|e| e.to_string());
                if handle.is_aborted() {
                    return;
                }
                setArtist.set(Some(result));
            });
        });
    }

    view! {
        {move || match artist.get() {
            None => {
                view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        "Loading artist..."
                    </div>
                }
                    .into_any()
            }
            Some(Err(e)) => {
                view! { <p class="error-banner">"Failed to load artist data: " {e}</p> }.into_any()
            }
            Some(Ok(artist)) => view! { <ArtistDetail artist=artist /> }.into_any(),
        }}
    }
}

#[component]
fn ArtistDetail(artist: ArtistDto) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let currentUser = expect_context::<CurrentUser>();
    let toast = expect_context::<ToastContext>();
    let navigate = use_navigate();

    let artistId = artist.id;
    let artistName = artist.artist_name.clone();
    let description = artist.description.clone();
    let imageUrl = artist.image_url.clone();
    let albums = artist.albums.clone();
    let tracks = artist.tracks.clone();

    // Capabilities re-evaluate when the identity probe resolves
    let caps = {
        let artist = artist.clone();
        Memo::new(move |_| {
            let user = currentUser.get();
            capabilities(user.as_ref(), Resource::Artist(&artist))
        })
    };

    let editNavigate = navigate.clone();
    let handleEdit = move |_| {
        editNavigate(&format!("/artists/{artistId}/edit"), Default::default());
    };
    let createAlbumNavigate = navigate.clone();
    let handleCreateAlbum = move |_| {
        createAlbumNavigate(
            &format!("/artists/{artistId}/albums/new"),
            Default::default(),
        );
    };
    let handleDelete = move |_| {
        if !window()
            .confirm_with_message(
                "Are you sure you want to delete this artist? This action cannot be undone!",
            )
            .unwrap_or(false)
        {
            return;
        }
        let client = client.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match artists::delete(&client, artistId).await {
                Ok(()) => {
                    toast.success("Artist deleted");
                    // Drops out of the managed list too
                    currentUser.refresh(&client);
                    navigate("/profile", Default::default());
                }
                Err(err) => toast.error(format!("Failed to delete artist: {err}")),
            }
        });
    };

    view! {
        <div class="artist-header">
            <Artwork image=imageUrl alt=artistName.clone() class="artist-portrait-lg" />
            <div class="artist-meta">
                <div class="artist-title-row">
                    <h1>{artistName}</h1>
                    {move || {
                        caps.get()
                            .edit
                            .then(|| {
                                let handleEdit = handleEdit.clone();
                                let handleDelete = handleDelete.clone();
                                view! {
                                    <div class="artist-actions">
                                        <button class="btn btn-primary" on:click=handleEdit>
                                            "Edit Artist"
                                        </button>
                                        <button class="btn btn-danger" on:click=handleDelete>
                                            "Delete Artist"
                                        </button>
                                    </div>
                                }
                            })
                    }}
                </div>
                {(!description.is_empty())
                    .then(|| view! { <p class="artist-description">{description.clone()}</p> })}
            </div>
        </div>

        <section class="detail-section">
            <div class="section-title-row">
                <h2>"Albums"</h2>
                {move || {
                    caps.get()
                        .add_children
                        .then(|| {
                            let handleCreateAlbum = handleCreateAlbum.clone();
                            view! {
                                <button class="btn btn-primary" on:click=handleCreateAlbum>
                                    "+ Create Album"
                                </button>
                            }
                        })
                }}
            </div>
            {if albums.is_empty() {
                view! {
                    <div class="empty-state">
                        <p>"No albums yet"</p>
                    </div>
                }
                    .into_any()
            } else {
                view! {
                    <div class="tile-grid">
                        {albums
                            .into_iter()
                            .map(|album| {
                                view! {
                                    <a href=format!("/albums/{}", album.id) class="album-tile">
                                        <Artwork
                                            image=album.image_url
                                            alt=album.title.clone()
                                            class="album-cover"
                                        />
                                        <p class="album-title">{album.title}</p>
                                        <p class="album-year">{release_year(album.release_date)}</p>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            }}
        </section>

        <section class="detail-section">
            <h2>"Popular Tracks"</h2>
            {if tracks.is_empty() {
                view! {
                    <div class="empty-state">
                        <p>"No tracks yet"</p>
                    </div>
                }
                    .into_any()
            } else {
                view! {
                    <div class="track-list">
                        {tracks
                            .into_iter()
                            .enumerate()
                            .map(|(index, track)| {
                                view! {
                                    <div class="track-row">
                                        <span class="track-index">{index + 1}</span>
                                        <a
                                            href=format!("/tracks/{}", track.id)
                                            class="track-title"
                                        >
                                            {track.title.clone()}
                                        </a>
                                        <span class="track-duration">
                                            {format_duration(track.duration_seconds)}
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            }}
        </section>
    }
}
