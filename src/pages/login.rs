//! Login page: email/password form exchanging credentials for a token.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::User;
use crate::state::auth::AuthState;
use crate::state::session::SessionContext;
use crate::util::storage;

/// Login form. Failures surface as an inline error string; success stores
/// the token, starts a fresh conversation, and returns home.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cx = expect_context::<SessionContext>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let do_login = move || {
        if submitting.get_untracked() {
            return;
        }
        error.set(None);
        submitting.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result =
                crate::net::api::login(&email.get_untracked(), &password.get_untracked()).await;
            match result {
                Ok(token) => {
                    storage::write_token(&token);
                    auth.update(|a| {
                        a.sign_in(User {
                            email: email.get_untracked(),
                        });
                    });
                    cx.chat.update(|chat| {
                        chat.create_conversation();
                    });
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => error.set(Some(e)),
            }
            submitting.set(false);
        });
    };

    let on_click = {
        let do_login = do_login.clone();
        move |_| do_login()
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            do_login();
        }
    };

    view! {
        <div class="login-page">
            <div class="login-page__card">
                <h2>"Welcome Back"</h2>

                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                    prop:disabled=move || submitting.get()
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:keydown=on_keydown
                    prop:disabled=move || submitting.get()
                />

                {move || {
                    error.get().map(|e| view! { <p class="login-page__error">{e}</p> })
                }}

                <button
                    class="btn btn--primary"
                    on:click=on_click
                    prop:disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>

                <p class="login-page__signup-hint">
                    "No account? " <a href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
