//! Sidebar: new chat, recent conversations, theme toggle, auth actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::chat::ChatState;
use crate::state::session::{EditState, SessionContext};
use crate::state::ui::UiState;
use crate::util::{dark_mode, storage};

/// Navigation sidebar. Recent conversations are the store's own ordering
/// (newest first); selecting one switches the active thread without
/// touching any in-flight request.
#[component]
pub fn Navbar() -> impl IntoView {
    let cx = expect_context::<SessionContext>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let on_new_chat = move |_| {
        cx.chat.update(|chat| {
            chat.create_conversation();
        });
        cx.edit.update(EditState::cancel);
        cx.input.set(String::new());
    };

    let on_theme_toggle = move |_| {
        ui.update(|u| u.dark_mode = dark_mode::toggle(u.dark_mode));
    };

    let on_logout = move |_| {
        storage::clear_token();
        auth.update(AuthState::sign_out);
        cx.chat.update(ChatState::reset);
        cx.edit.update(EditState::cancel);
        cx.input.set(String::new());
        navigate("/", NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <button class="btn btn--primary navbar__new-chat" on:click=on_new_chat>
                "+ New chat"
            </button>

            <div class="navbar__recents">
                {move || {
                    cx.chat
                        .get()
                        .conversations
                        .iter()
                        .map(|c| {
                            let id = c.id.clone();
                            let title = c.title.clone();
                            let active = cx.chat.get().active_id.as_deref() == Some(c.id.as_str());
                            let on_select = move |_| {
                                cx.chat.update(|chat| chat.select_conversation(&id));
                                cx.edit.update(EditState::cancel);
                            };
                            view! {
                                <button
                                    class="navbar__recent"
                                    class:navbar__recent--active=active
                                    on:click=on_select
                                >
                                    {title}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="navbar__footer">
                <button class="btn" on:click=on_theme_toggle>
                    {move || if ui.get().dark_mode { "Light mode" } else { "Dark mode" }}
                </button>

                {move || {
                    if auth.get().is_authenticated() {
                        let on_logout = on_logout.clone();
                        view! {
                            <button class="btn" on:click=on_logout>
                                "Log out"
                            </button>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="navbar__auth-links">
                                <a href="/login">"Log in"</a>
                                <a href="/signup">"Sign up"</a>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </nav>
    }
}
