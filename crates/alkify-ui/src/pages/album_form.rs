use std::cell::RefCell;
use std::rc::Rc;

use alkify_api::{albums, AbortHandle, ApiClient};
use alkify_types::AlbumRequest;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use wasm_bindgen_futures::spawn_local;

use crate::components::toast::ToastContext;

/// Reached from two routes: `/artists/:artist_id/albums/new` creates an
/// album under that artist, `/albums/:album_id/edit` edits an existing
/// one.
#[component]
pub fn AlbumFormPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let toast = expect_context::<ToastContext>();
    let navigate = use_navigate();

    let params = use_params_map();
    let artistId =
        params.with_untracked(|p| p.get("artist_id").and_then(|v| v.parse::<i64>().ok()));
    let albumId = params.with_untracked(|p| p.get("album_id").and_then(|v| v.parse::<i64>().ok()));

    let (title, setTitle) = signal(String::new());
    let (description, setDescription) = signal(String::new());
    let (imagePreview, setImagePreview) = signal(Option::<String>::None);
    let (loading, setLoading) = signal(false);
    let (error, setError) = signal(String::new());

    let imageFile: Rc<RefCell<Option<web_sys::File>>> = Rc::new(RefCell::new(None));

    let guard = AbortHandle::new();
    {
        let guard = guard.clone();
        on_cleanup(move || guard.abort());
    }

    if let Some(id) = albumId {
        let client = client.clone();
        spawn_local(async move {
            match albums::get(&client, id).await {
                Ok(album) => {
                    if guard.is_aborted() {
                        return;
                    }
                    setTitle.set(album.title);
                    setDescription.set(album.description);
                    if let Some(image) = album.image_url {
                        setImagePreview.set(Some(client.image_url(&image)));
                    }
                }
                Err(err) => {
                    if guard.is_aborted() {
                        return;
                    }
                    setError.set(format!("Failed to load album data: {err}"));
                }
            }
        });
    }

    let handleFile = {
        let imageFile = imageFile.clone();
        move |ev: leptos::ev::Event| {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };
            if let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) {
                setImagePreview.set(Some(url));
            }
            *imageFile.borrow_mut() = Some(file);
        }
    };

    let handleSubmit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        let desc = description.get_untracked();
        let request = AlbumRequest {
            title: title.get_untracked(),
            description: (!desc.is_empty()).then_some(desc),
            tracks: None,
        };

        setLoading.set(true);
        setError.set(String::new());

        let client = client.clone();
        let navigate = navigate.clone();
        let imageFile = imageFile.clone();
        spawn_local(async move {
            let file = imageFile.borrow().clone();
            let result = match (albumId, artistId) {
                (Some(id), _) => albums::update(&client, id, &request, file.as_ref()).await,
                (None, Some(artist)) => {
                    albums::create(&client, artist, &request, file.as_ref()).await
                }
                (None, None) => {
                    setLoading.set(false);
                    setError.set("No artist selected for the new album".to_string());
                    return;
                }
            };
            setLoading.set(false);
            match result {
                Ok(album) => {
                    toast.success(if albumId.is_some() {
                        "Album updated"
                    } else {
                        "Album created"
                    });
                    let target = match artistId {
                        Some(artist) => format!("/artists/{artist}"),
                        None => format!("/albums/{}", album.id),
                    };
                    navigate(&target, Default::default());
                }
                Err(err) => setError.set(format!("Failed to save album: {err}")),
            }
        });
    };

    view! {
        <div class="form-card">
            <div class="form-card-header">
                <h1>{if albumId.is_some() { "Edit Album" } else { "Create New Album" }}</h1>
                <p>
                    {if albumId.is_some() {
                        "Update album information"
                    } else {
                        "Fill in the album details"
                    }}
                </p>
            </div>

            {move || {
                let message = error.get();
                (!message.is_empty()).then(|| view! { <div class="error-banner">{message}</div> })
            }}

            <form on:submit=handleSubmit>
                <div class="form-group">
                    <label for="album-title">"Title"</label>
                    <input
                        type="text"
                        id="album-title"
                        prop:value=title
                        on:input=move |ev| setTitle.set(event_target_value(&ev))
                        required
                    />
                </div>
                <div class="form-group">
                    <label for="album-description">"Description"</label>
                    <textarea
                        id="album-description"
                        rows="4"
                        prop:value=description
                        on:input=move |ev| setDescription.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="form-group">
                    <label>"Cover image"</label>
                    {move || {
                        imagePreview
                            .get()
                            .map(|url| {
                                view! { <img src=url alt="Cover preview" class="image-preview" /> }
                            })
                    }}
                    <input type="file" accept="image/*" on:change=handleFile />
                </div>
                <button type="submit" class="btn btn-primary" disabled=loading>
                    {move || {
                        if loading.get() {
                            "Saving..."
                        } else if albumId.is_some() {
                            "Update Album"
                        } else {
                            "Create Album"
                        }
                    }}
                </button>
            </form>
        </div>
    }
}
