//! Home page: landing hero for an empty session, chat thread otherwise.

use leptos::prelude::*;

use crate::components::ai_message::AssistantMessage;
use crate::components::input_bar::InputBar;
use crate::components::landing::Landing;
use crate::components::navbar::Navbar;
use crate::state::chat::Role;
use crate::state::session::SessionContext;

#[component]
pub fn HomePage() -> impl IntoView {
    let cx = expect_context::<SessionContext>();

    let has_messages = move || {
        cx.chat
            .get()
            .active_conversation()
            .is_some_and(|c| !c.messages.is_empty())
    };

    view! {
        <div class="home-page">
            <Navbar/>
            <main class="home-page__main">
                {move || {
                    if has_messages() {
                        view! { <ChatThread/> }.into_any()
                    } else {
                        view! { <Landing/> }.into_any()
                    }
                }}
            </main>
        </div>
    }
}

/// The active conversation: message list, loading indicator, input bar.
#[component]
fn ChatThread() -> impl IntoView {
    let cx = expect_context::<SessionContext>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = cx
            .chat
            .get()
            .active_conversation()
            .map(|c| c.messages.len());

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div class="chat-thread">
            <div class="chat-thread__messages" node_ref=messages_ref>
                {move || {
                    cx.chat
                        .get()
                        .active_conversation()
                        .map(|c| c.messages.clone())
                        .unwrap_or_default()
                        .into_iter()
                        .map(|message| match message.role {
                            Role::User => {
                                view! { <crate::components::user_message::UserMessage message=message/> }
                                    .into_any()
                            }
                            Role::Assistant => {
                                view! { <AssistantMessage message=message/> }.into_any()
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                {move || {
                    cx.chat
                        .get()
                        .active_is_pending()
                        .then(|| view! { <div class="chat-thread__loading">"Thinking..."</div> })
                }}
            </div>
            <InputBar/>
        </div>
    }
}
