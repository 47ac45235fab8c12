use alkify_api::ApiClient;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::CurrentUser;

#[component]
pub fn Nav() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let currentUser = expect_context::<CurrentUser>();
    let navigate = use_navigate();

    let (searchQuery, setSearchQuery) = signal(String::new());

    let searchNavigate = navigate.clone();
    let handleSearch = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let query = searchQuery.get_untracked();
        if !query.trim().is_empty() {
            let encoded = js_sys::encode_uri_component(&query);
            searchNavigate(&format!("/search?q={encoded}"), Default::default());
        }
    };

    let logoutClient = client.clone();
    let handleLogout = move |_| {
        logoutClient.session().clear();
        currentUser.set(None);
        navigate("/", Default::default());
    };

    view! {
        <nav class="nav-bar">
            <a href="/" class="nav-brand">
                <div class="brand-icon">"A"</div>
                <span class="brand-text">"Alkify"</span>
            </a>

            <form class="nav-search" on:submit=handleSearch>
                <input
                    type="text"
                    placeholder="Search for tracks, artists, albums..."
                    prop:value=searchQuery
                    on:input=move |ev| setSearchQuery.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-ghost btn-sm">
                    "Search"
                </button>
            </form>

            <div class="nav-user">
                {move || {
                    match currentUser.get() {
                        Some(user) => {
                            let handleLogout = handleLogout.clone();
                            view! {
                                <a href="/profile" class="nav-username">
                                    {user.username}
                                </a>
                                <button class="btn btn-ghost btn-sm" on:click=handleLogout>
                                    "Logout"
                                </button>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <a href="/login" class="btn btn-ghost btn-sm">
                                    "Login"
                                </a>
                                <a href="/register" class="btn btn-primary btn-sm">
                                    "Sign Up"
                                </a>
                            }
                                .into_any()
                        }
                    }
                }}
            </div>
        </nav>
    }
}
