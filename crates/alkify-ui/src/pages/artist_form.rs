use std::cell::RefCell;
use std::rc::Rc;

use alkify_api::{artists, AbortHandle, ApiClient};
use alkify_types::ArtistRequest;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use wasm_bindgen_futures::spawn_local;

use crate::app::CurrentUser;
use crate::components::toast::ToastContext;

/// Create and edit share one form; an `artist_id` route param selects
/// edit mode.
#[component]
pub fn ArtistFormPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let currentUser = expect_context::<CurrentUser>();
    let toast = expect_context::<ToastContext>();
    let navigate = use_navigate();

    let params = use_params_map();
    let artistId =
        params.with_untracked(|p| p.get("artist_id").and_then(|v| v.parse::<i64>().ok()));

    let (name, setName) = signal(String::new());
    let (description, setDescription) = signal(String::new());
    let (imagePreview, setImagePreview) = signal(Option::<String>::None);
    let (loading, setLoading) = signal(false);
    let (error, setError) = signal(String::new());

    // The picked file is not reactive state; only its preview URL is.
    let imageFile: Rc<RefCell<Option<web_sys::File>>> = Rc::new(RefCell::new(None));

    let guard = AbortHandle::new();
    {
        let guard = guard.clone();
        on_cleanup(move || guard.abort());
    }

    // Prefill in edit mode
    if let Some(id) = artistId {
        let client = client.clone();
        spawn_local(async move {
            match artists::get(&client, id).await {
                Ok(artist) => {
                    if guard.is_aborted() {
                        return;
                    }
                    setName.set(artist.artist_name);
                    setDescription.set(artist.description);
                    if let Some(image) = artist.image_url {
                        setImagePreview.set(Some(client.image_url(&image)));
                    }
                }
                Err(err) => {
                    if guard.is_aborted() {
                        return;
                    }
                    setError.set(format!("Failed to load artist data: {err}"));
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
        let request = ArtistRequest {
            artist_name: name.get_untracked(),
            description: (!desc.is_empty()).then_some(desc),
            albums: None,
        };

        setLoading.set(true);
        setError.set(String::new());

        let client = client.clone();
        let navigate = navigate.clone();
        let imageFile = imageFile.clone();
        spawn_local(async move {
            let file = imageFile.borrow().clone();
            let result = match artistId {
                Some(id) => artists::update(&client, id, &request, file.as_ref()).await,
                None => artists::create(&client, &request, file.as_ref()).await,
            };
            setLoading.set(false);
            match result {
                Ok(artist) => {
                    toast.success(if artistId.is_some() {
                        "Artist updated"
                    } else {
                        "Artist created"
                    });
                    // The managed-artist list changed; re-probe identity
                    currentUser.refresh(&client);
                    navigate(&format!("/artists/{}", artist.id), Default::default());
                }
                Err(err) => setError.set(format!("Failed to save artist: {err}")),
            }
        });
    };

    view! {
        <div class="form-card">
            <div class="form-card-header">
                <h1>{if artistId.is_some() { "Edit Artist" } else { "Create New Artist" }}</h1>
                <p>
                    {if artistId.is_some() {
                        "Update the artist information"
                    } else {
                        "Fill in the new artist's details"
                    }}
                </p>
            </div>

            {move || {
                let message = error.get();
                (!message.is_empty()).then(|| view! { <div class="error-banner">{message}</div> })
            }}

            <form on:submit=handleSubmit>
                <div class="form-group">
                    <label for="artist-name">"Artist name"</label>
                    <input
                        type="text"
                        id="artist-name"
                        prop:value=name
                        on:input=move |ev| setName.set(event_target_value(&ev))
                        required
                    />
                </div>
                <div class="form-group">
                    <label for="artist-description">"Description"</label>
                    <textarea
                        id="artist-description"
                        rows="4"
                        prop:value=description
                        on:input=move |ev| setDescription.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="form-group">
                    <label>"Artist image"</label>
                    {move || {
                        imagePreview
                            .get()
                            .map(|url| {
                                view! { <img src=url alt="Image preview" class="image-preview" /> }
                            })
                    }}
                    <input type="file" accept="image/*" on:change=handleFile />
                </div>
                <button type="submit" class="btn btn-primary" disabled=loading>
                    {move || {
                        if loading.get() {
                            "Saving..."
                        } else if artistId.is_some() {
                            "Update Artist"
                        } else {
                            "Create Artist"
                        }
                    }}
                </button>
            </form>
        </div>
    }
}
