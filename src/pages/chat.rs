//! Chat page: the question/answer loop against the uploaded rulebook.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::chat_bubble::ChatBubble;
use crate::components::loading_dots::LoadingDots;
use crate::state::flow::{self, Guard, Screen};
use crate::state::game::{ChatMessage, GameState};
use crate::util::validate::can_submit_question;

const SUGGESTED_QUESTIONS: [&str; 4] = [
    "How do I set up the game?",
    "What are the winning conditions?",
    "How does trading work?",
    "What happens when I roll a 7?",
];

/// Chat page — transcript, question input, and session teardown.
///
/// Guarded: without a game name or session id the user is redirected back
/// up the flow. At most one `/ask` call is in flight at a time; while one
/// is outstanding further submissions are ignored. An ask failure becomes
/// a fixed fallback message in the transcript instead of an error screen.
#[component]
pub fn ChatPage() -> impl IntoView {
    let game = expect_context::<RwSignal<GameState>>();
    let navigate = use_navigate();

    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if let Guard::RedirectTo(target) = flow::check(Screen::Chat, &game.get()) {
                navigate(target.path(), NavigateOptions::default());
            }
        });
    }

    let question = RwSignal::new(String::new());
    let is_asking = RwSignal::new(false);
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Greet on mount; `ensure_welcome` is a no-op once any message exists.
    Effect::new(move || {
        game.update(GameState::ensure_welcome);
    });

    // Pin the transcript to the newest message.
    Effect::new(move || {
        let _ = game.get().messages.len();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = question.get();
        if !can_submit_question(&text, is_asking.get()) {
            return;
        }
        let asked = text.trim().to_owned();

        game.update(|g| {
            g.add_message(ChatMessage::user(asked.clone()));
            g.set_loading(true);
        });
        question.set(String::new());
        is_asking.set(true);

        #[cfg(feature = "csr")]
        {
            let session_id = game.get_untracked().session_id;
            leptos::task::spawn_local(async move {
                let result = crate::net::api::ask_question(&session_id, &asked).await;
                if let Err(e) = &result {
                    leptos::logging::warn!("ask: {e}");
                }
                game.update(|g| g.resolve_ask(result));
                is_asking.set(false);
                if let Some(input) = input_ref.get_untracked() {
                    let _ = input.focus();
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            // No network on this target; resolve the exchange the way a
            // failed `/ask` would.
            game.update(|g| {
                g.resolve_ask(Err(crate::net::api::ApiError::Ask(
                    "not available on this target".to_owned(),
                )));
            });
            is_asking.set(false);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    // Best-effort teardown: the backend result is logged and ignored, the
    // local session always resets.
    let end_navigate = navigate.clone();
    let on_end_session = move |_| {
        let session_id = game.get_untracked().session_id;
        let navigate = end_navigate.clone();

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::end_session(&session_id).await {
                leptos::logging::warn!("end session: {e}");
            }
            navigate(Screen::Home.path(), NavigateOptions::default());
            game.update(GameState::reset);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = session_id;
            navigate(Screen::Home.path(), NavigateOptions::default());
            game.update(GameState::reset);
        }
    };

    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <div class="chat-page__title">
                    <div class="chat-page__logo">"🎲"</div>
                    <div>
                        <h1>{move || game.get().game_name}</h1>
                        <p class="chat-page__subtitle">"Rule Assistant"</p>
                    </div>
                </div>
                <button class="btn chat-page__end" on:click=on_end_session>
                    "End Session"
                </button>
            </header>

            <div class="chat-page__messages" node_ref=messages_ref>
                <For
                    each=move || game.get().messages
                    key=|msg| msg.id.clone()
                    children=|msg| view! { <ChatBubble message=msg/> }
                />
                <Show when=move || is_asking.get()>
                    <div class="chat-page__thinking">
                        <LoadingDots text="Thinking"/>
                    </div>
                </Show>
            </div>

            <Show when=move || !game.get().has_user_messages() && !is_asking.get()>
                <div class="chat-page__suggestions">
                    <p>"Try asking:"</p>
                    {SUGGESTED_QUESTIONS
                        .into_iter()
                        .map(|s| {
                            view! {
                                <button class="chip" on:click=move |_| question.set(s.to_owned())>
                                    {s}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>

            <div class="chat-page__input-row">
                <input
                    class="chat-page__input"
                    type="text"
                    placeholder="Ask about trading rules in Catan..."
                    prop:value=move || question.get()
                    on:input=move |ev| question.set(event_target_value(&ev))
                    on:keydown=on_keydown
                    disabled=move || is_asking.get()
                    node_ref=input_ref
                />
                <button
                    class="btn btn--primary chat-page__send"
                    disabled=move || !can_submit_question(&question.get(), is_asking.get())
                    on:click=move |_| do_send()
                >
                    {move || if is_asking.get() { "..." } else { "Send" }}
                </button>
            </div>
        </div>
    }
}
