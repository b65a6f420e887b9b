//! Chat message bubble for user and AI transcript entries.

use leptos::prelude::*;

use crate::net::api::format_sources;
use crate::state::game::{ChatMessage, MessageKind};

/// One transcript entry: avatar, bubble text, citations, and send time.
#[component]
pub fn ChatBubble(message: ChatMessage) -> impl IntoView {
    let is_user = message.kind == MessageKind::User;
    let sources_line = format_sources(message.sources.as_deref());
    let has_sources = !sources_line.is_empty();
    let clock = format_clock(message.timestamp);

    view! {
        <div class="chat-bubble" class:chat-bubble--user=is_user>
            <div class="chat-bubble__avatar">{if is_user { "U" } else { "🎲" }}</div>
            <div class="chat-bubble__body">
                <p class="chat-bubble__content">{message.content}</p>
                <Show when=move || has_sources>
                    <p class="chat-bubble__sources">{sources_line.clone()}</p>
                </Show>
                <span class="chat-bubble__time">{clock}</span>
            </div>
        </div>
    }
}

/// Render epoch milliseconds as a local `HH:MM`. Requires a browser clock;
/// host builds render nothing.
fn format_clock(timestamp_ms: f64) -> String {
    #[cfg(feature = "csr")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp_ms));
        format!("{:02}:{:02}", date.get_hours(), date.get_minutes())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = timestamp_ms;
        String::new()
    }
}
