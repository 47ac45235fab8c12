use alkify_api::{users, AbortHandle, ApiClient};
use alkify_types::{UserDto, UserRequest};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::app::CurrentUser;
use crate::components::media::Artwork;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let currentUser = expect_context::<CurrentUser>();
    let navigate = use_navigate();

    let (user, setUser) = signal(Option::<Result<UserDto, String>>::None);
    let (editing, setEditing) = signal(false);
    let (username, setUsername) = signal(String::new());
    let (email, setEmail) = signal(String::new());
    let (password, setPassword) = signal(String::new());
    let (error, setError) = signal(String::new());

    let guard = AbortHandle::new();
    {
        let guard = guard.clone();
        on_cleanup(move || guard.abort());
    }

    // Fresh identity probe on mount; the nav's cached user may be stale
    {
        let client = client.clone();
        spawn_local(async move {
            let result = users::me(&client).await.map_err(|e| e.to_string());
            if guard.is_aborted() {
                return;
            }
            if let Ok(user) = &result {
                setUsername.set(user.username.clone());
                setEmail.set(user.email.clone());
            }
            setUser.set(Some(result));
        });
    }

    let submitClient = client.clone();
    let handleSubmit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = UserRequest {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            managed_artists: None,
        };

        let client = submitClient.clone();
        spawn_local(async move {
            match users::update(&client, &request).await {
                Ok(updated) => {
                    currentUser.set(Some(updated.clone()));
                    setUser.set(Some(Ok(updated)));
                    setEditing.set(false);
                    setError.set(String::new());
                    setPassword.set(String::new());
                }
                Err(err) => {
                    leptos::logging::error!("profile update failed: {err}");
                    setError.set("Failed to update profile".to_string());
                }
            }
        });
    };

    view! {
        {move || {
            let handleSubmit = handleSubmit.clone();
            let navigate = navigate.clone();
            match user.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Loading profile..."
                        </div>
                    }
                        .into_any()
                }
                Some(Err(e)) => {
                    view! { <p class="error-banner">"Failed to load profile: " {e}</p> }.into_any()
                }
                Some(Ok(user)) => {
                    let initial = user
                        .username
                        .chars()
                        .next()
                        .map(|c| c.to_uppercase().to_string())
                        .unwrap_or_default();

                    view! {
                        <div class="profile-layout">
                            <div class="profile-card">
                                <div class="profile-avatar">{initial}</div>
                                {move || {
                                    if editing.get() {
                                        let handleSubmit = handleSubmit.clone();
                                        view! {
                                            <form class="profile-form" on:submit=handleSubmit>
                                                <div class="form-group">
                                                    <label for="username">"Username"</label>
                                                    <input
                                                        type="text"
                                                        id="username"
                                                        prop:value=username
                                                        on:input=move |ev| {
                                                            setUsername.set(event_target_value(&ev))
                                                        }
                                                        required
                                                    />
                                                </div>
                                                <div class="form-group">
                                                    <label for="email">"Email"</label>
                                                    <input
                                                        type="email"
                                                        id="email"
                                                        prop:value=email
                                                        on:input=move |ev| setEmail.set(event_target_value(&ev))
                                                        required
                                                    />
                                                </div>
                                                <div class="form-group">
                                                    <label for="password">
                                                        "New Password (leave empty to keep current)"
                                                    </label>
                                                    <input
                                                        type="password"
                                                        id="password"
                                                        prop:value=password
                                                        on:input=move |ev| {
                                                            setPassword.set(event_target_value(&ev))
                                                        }
                                                    />
                                                </div>
                                                {move || {
                                                    let message = error.get();
                                                    (!message.is_empty())
                                                        .then(|| {
                                                            view! { <div class="error-banner">{message}</div> }
                                                        })
                                                }}
                                                <div class="profile-form-actions">
                                                    <button type="submit" class="btn btn-primary">
                                                        "Save"
                                                    </button>
                                                    <button
                                                        type="button"
                                                        class="btn btn-ghost"
                                                        on:click=move |_| setEditing.set(false)
                                                    >
                                                        "Cancel"
                                                    </button>
                                                </div>
                                            </form>
                                        }
                                            .into_any()
                                    } else {
                                        let displayName = username.get_untracked();
                                        let displayEmail = email.get_untracked();
                                        view! {
                                            <h2>{displayName}</h2>
                                            <p class="profile-email">{displayEmail}</p>
                                            <button
                                                class="btn btn-primary"
                                                on:click=move |_| setEditing.set(true)
                                            >
                                                "Edit Profile"
                                            </button>
                                        }
                                            .into_any()
                                    }
                                }}
                            </div>

                            <div class="profile-artists">
                                <div class="section-title-row">
                                    <h2>"My Artists"</h2>
                                    <button
                                        class="btn btn-primary"
                                        on:click=move |_| navigate("/artists/new", Default::default())
                                    >
                                        "+ Create Artist"
                                    </button>
                                </div>
                                {if user.managed_artists.is_empty() {
                                    view! {
                                        <div class="empty-state">
                                            <p>
                                                "You don't have any artists yet. Click \"Create Artist\" to get started!"
                                            </p>
                                        </div>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="tile-grid">
                                            {user
                                                .managed_artists
                                                .iter()
                                                .map(|artist| {
                                                    view! {
                                                        <a
                                                            href=format!("/artists/{}", artist.id)
                                                            class="artist-tile"
                                                        >
                                                            <Artwork
                                                                image=artist.image_url.clone()
                                                                alt=artist.artist_name.clone()
                                                                class="artist-portrait"
                                                            />
                                                            <p>{artist.artist_name.clone()}</p>
                                                        </a>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    }
                                        .into_any()
                                }}
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }
        }}
    }
}
