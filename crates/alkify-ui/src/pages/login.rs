use alkify_api::{auth, ApiClient};
use alkify_types::AuthRequest;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::app::CurrentUser;

#[component]
pub fn LoginPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let currentUser = expect_context::<CurrentUser>();
    let navigate = use_navigate();

    let (email, setEmail) = signal(String::new());
    let (password, setPassword) = signal(String::new());
    let (error, setError) = signal(String::new());

    let handleSubmit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = AuthRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        if let Err(err) = request.validate() {
            setError.set(err.to_string());
            return;
        }

        let client = client.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth::login(&client, &request).await {
                Ok(jwt) => {
                    // Persisting the token is the caller's job; the next
                    // request will carry it.
                    client.session().store_token(&jwt.token);
                    currentUser.refresh(&client);
                    navigate("/", Default::default());
                }
                Err(err) => {
                    leptos::logging::error!("login failed: {err}");
                    setError.set("Invalid email or password.".to_string());
                }
            }
        });
    };

    view! {
        <div class="auth-card">
            <div class="auth-header">
                <h1>"Login"</h1>
                <p>"Welcome back! Please enter your credentials."</p>
            </div>

            {move || {
                let message = error.get();
                (!message.is_empty()).then(|| view! { <div class="error-banner">{message}</div> })
            }}

            <form on:submit=handleSubmit>
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
                    "Login"
                </button>
            </form>

            <p class="auth-switch">
                "Don't have an account? " <a href="/register">"Register"</a>
            </p>
        </div>
    }
}
