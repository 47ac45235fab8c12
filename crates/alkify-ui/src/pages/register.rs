use alkify_api::{auth, ApiClient};
use alkify_types::UserRequest;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::app::CurrentUser;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let currentUser = expect_context::<CurrentUser>();
    let navigate = use_navigate();

    let (username, setUsername) = signal(String::new());
    let (email, setEmail) = signal(String::new());
    let (password, setPassword) = signal(String::new());
    let (error, setError) = signal(String::new());

    let handleSubmit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = UserRequest {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            managed_artists: None,
        };
        // Rejected before any request leaves the browser
        if let Err(err) = request.validate() {
            setError.set(err.to_string());
            return;
        }

        let client = client.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth::register(&client, &request).await {
                Ok(jwt) => {
                    client.session().store_token(&jwt.token);
                    currentUser.refresh(&client);
                    navigate("/", Default::default());
                }
                Err(err) => {
                    leptos::logging::error!("registration failed: {err}");
                    setError.set("Registration failed. Please try again.".to_string());
                }
            }
        });
    };

    view! {
        <div class="auth-card">
            <div class="auth-header">
                <h1>"Registration"</h1>
                <p>"Enter the details about you."</p>
            </div>

            {move || {
                let message = error.get();
                (!message.is_empty()).then(|| view! { <div class="error-banner">{message}</div> })
            }}

            <form on:submit=handleSubmit>
                <div class="form-group">
                    <label for="username">"Username"</label>
                    <input
                        type="text"
                        id="username"
                        prop:value=username
                        on:input=move |ev| setUsername.set(event_target_value(&ev))
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
                    <label for="password">"Password"</label>
                    <input
                        type="password"
                        id="password"
                        prop:value=password
                        on:input=move |ev| setPassword.set(event_target_value(&ev))
                        required
                    />
                </div>
                <button type="submit" class="btn btn-primary">
                    "Register"
                </button>
            </form>

            <p class="auth-switch">
                "Already have an account? " <a href="/login">"Login"</a>
            </p>
        </div>
    }
}
