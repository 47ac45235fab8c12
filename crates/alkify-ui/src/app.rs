use alkify_api::{users, ApiClient, Config, Session};
use alkify_types::UserDto;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use wasm_bindgen_futures::spawn_local;

use crate::components::nav::Nav;
use crate::components::toast::ToastProvider;
use crate::pages::album::AlbumPage;
use crate::pages::album_form::AlbumFormPage;
use crate::pages::artist::ArtistPage;
use crate::pages::artist_form::ArtistFormPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::pages::search::SearchPage;
use crate::pages::track::TrackPage;
use crate::pages::track_form::TrackFormPage;

/// Shared identity state: the result of the most recent `GET /users/me`
/// probe. `None` renders the unauthenticated view everywhere.
#[derive(Clone, Copy)]
pub struct CurrentUser {
    user: ReadSignal<Option<UserDto>>,
    set_user: WriteSignal<Option<UserDto>>,
}

impl CurrentUser {
    pub fn get(&self) -> Option<UserDto> {
        self.user.get()
    }

    pub fn set(&self, user: Option<UserDto>) {
        self.set_user.set(user);
    }

    /// Re-runs the identity probe and updates the shared signal. A
    /// rejected probe only renders the anonymous view; the stored token
    /// is not touched.
    pub fn refresh(&self, client: &ApiClient) {
        let setUser = self.set_user;
        let client = client.clone();
        spawn_local(async move {
            match users::me(&client).await {
                Ok(user) => setUser.set(Some(user)),
                Err(_) => setUser.set(None),
            }
        });
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let client = ApiClient::new(Config::from_env(), Session::browser());
    provide_context(client.clone());

    let (user, setUser) = signal(Option::<UserDto>::None);
    let currentUser = CurrentUser {
        user,
        set_user: setUser,
    };
    provide_context(currentUser);

    // Identity probe on startup when a token survived from a previous visit
    if client.session().is_authenticated() {
        currentUser.refresh(&client);
    }

    view! {
        <Title text="Alkify" />
        <ToastProvider>
            <Router>
                <Nav />
                <main class="main-content">
                    <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }.into_any()>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/login") view=LoginPage />
                        <Route path=path!("/register") view=RegisterPage />
                        <Route path=path!("/search") view=SearchPage />
                        <Route path=path!("/profile") view=ProfilePage />
                        <Route path=path!("/artists/new") view=ArtistFormPage />
                        <Route path=path!("/artists/:artist_id") view=ArtistPage />
                        <Route path=path!("/artists/:artist_id/edit") view=ArtistFormPage />
                        <Route path=path!("/artists/:artist_id/albums/new") view=AlbumFormPage />
                        <Route path=path!("/albums/:album_id") view=AlbumPage />
                        <Route path=path!("/albums/:album_id/edit") view=AlbumFormPage />
                        <Route path=path!("/albums/:album_id/tracks/new") view=TrackFormPage />
                        <Route path=path!("/tracks/:track_id") view=TrackPage />
                        <Route path=path!("/tracks/:track_id/edit") view=TrackFormPage />
                    </Routes>
                </main>
            </Router>
        </ToastProvider>
    }
}
