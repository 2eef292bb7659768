//! Signup page: account creation form with client-side validation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::SignupRequest;
use crate::util::validation;

/// Signup form. Fields are validated as the user types; the submit button
/// stays disabled until every check passes. Service rejections surface the
/// `detail` message inline.
#[component]
pub fn SignupPage() -> impl IntoView {
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let user_type = RwSignal::new("taxpayer".to_owned());
    let gender = RwSignal::new("male".to_owned());
    let submit_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let name_error = Memo::new(move |_| {
        let value = name.get();
        (!value.is_empty() && value.trim().is_empty()).then(|| "Name is required".to_owned())
    });
    let email_error = Memo::new(move |_| {
        let value = email.get();
        (!value.is_empty() && !validation::validate_email(&value))
            .then(|| "Invalid email address".to_owned())
    });
    let password_error = Memo::new(move |_| {
        let value = password.get();
        (!value.is_empty() && !validation::validate_password(&value))
            .then(|| "Password must be 8+ chars with uppercase, lowercase & number".to_owned())
    });

    let can_submit = move || {
        !name.get().trim().is_empty()
            && validation::validate_email(&email.get())
            && validation::validate_password(&password.get())
            && !submitting.get()
    };

    let on_signup = move |_| {
        if !can_submit() {
            return;
        }
        submit_error.set(None);
        submitting.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let request = SignupRequest {
                name: name.get_untracked().trim().to_owned(),
                email: email.get_untracked().trim().to_owned(),
                password: password.get_untracked(),
                user_type: user_type.get_untracked(),
                gender: gender.get_untracked(),
            };
            match crate::net::api::signup(&request).await {
                Ok(()) => navigate("/login", NavigateOptions::default()),
                Err(e) => submit_error.set(Some(e)),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="signup-page">
            <div class="signup-page__card">
                <h2>"Create Account"</h2>

                <input
                    type="text"
                    placeholder="Full Name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                {move || name_error.get().map(|e| view! { <p class="signup-page__error">{e}</p> })}

                <input
                    type="email"
                    placeholder="Email Address"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                {move || email_error.get().map(|e| view! { <p class="signup-page__error">{e}</p> })}

                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                {move || {
                    password_error.get().map(|e| view! { <p class="signup-page__error">{e}</p> })
                }}

                {move || {
                    let value = password.get();
                    (!value.is_empty())
                        .then(|| {
                            let score = validation::password_strength(&value);
                            view! {
                                <p class="signup-page__strength">
                                    {format!(
                                        "Password strength: {}",
                                        validation::strength_label(score),
                                    )}
                                </p>
                            }
                        })
                }}

                <select
                    prop:value=move || user_type.get()
                    on:change=move |ev| user_type.set(event_target_value(&ev))
                >
                    <option value="taxpayer">"Taxpayer"</option>
                    <option value="consultant">"Consultant"</option>
                    <option value="student">"Student"</option>
                </select>

                <select
                    prop:value=move || gender.get()
                    on:change=move |ev| gender.set(event_target_value(&ev))
                >
                    <option value="male">"Male"</option>
                    <option value="female">"Female"</option>
                    <option value="other">"Other"</option>
                </select>

                {move || {
                    submit_error.get().map(|e| view! { <p class="signup-page__error">{e}</p> })
                }}

                <button
                    class="btn btn--primary"
                    on:click=on_signup
                    prop:disabled=move || !can_submit()
                >
                    {move || if submitting.get() { "Creating..." } else { "Sign up" }}
                </button>

                <p class="signup-page__login-hint">
                    "Already registered? " <a href="/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
