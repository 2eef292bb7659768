//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, login::LoginPage, signup::SignupPage};
use crate::state::auth::AuthState;
use crate::state::chat::ChatState;
use crate::state::session::{EditState, SessionContext};
use crate::state::ui::UiState;
use crate::util::{dark_mode, storage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, revalidates any stored session token
/// on startup, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let session = SessionContext {
        chat: RwSignal::new(ChatState::default()),
        edit: RwSignal::new(EditState::default()),
        input: RwSignal::new(String::new()),
    };

    provide_context(auth);
    provide_context(ui);
    provide_context(session);

    // Apply the persisted theme once the client is up.
    Effect::new(move || {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    // Revalidate a stored token against /me. A rejected token is discarded
    // silently; the user simply stays unauthenticated.
    Effect::new(move || {
        if storage::read_token().is_none() {
            return;
        }
        auth.update(|a| a.loading = true);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_me().await {
                Some(user) => auth.update(|a| a.sign_in(user)),
                None => {
                    storage::clear_token();
                    auth.update(AuthState::sign_out);
                }
            }
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/taxchat.css"/>
        <Title text="TaxChat"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
