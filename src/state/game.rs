#[cfg(test)]
#[path = "game_test.rs"]
mod game_test;

use crate::net::api::{ApiError, generate_message_id};
use crate::net::types::{AskResponse, SourceRef};

/// Fixed reply appended to the transcript when `/ask` fails.
pub const ASK_FALLBACK: &str =
    "Sorry, I encountered an error processing your question. Please try again.";

/// Session store shared by every page via context.
///
/// One instance lives for the whole client process. `reset` returns it to
/// the initial values when the user ends a session or navigates home.
#[derive(Clone, Debug, Default)]
pub struct GameState {
    /// Board game name, empty until the user submits one.
    pub game_name: String,
    /// Opaque token issued by the backend on upload, empty until then.
    pub session_id: String,
    /// Append-only chat transcript in insertion order.
    pub messages: Vec<ChatMessage>,
    /// Transient UI flag; pages keep their own in-flight signal for gating.
    pub is_loading: bool,
}

impl GameState {
    pub fn set_game_name(&mut self, name: impl Into<String>) {
        self.game_name = name.into();
    }

    pub fn set_session_id(&mut self, id: impl Into<String>) {
        self.session_id = id.into();
    }

    /// Append a message to the transcript. Messages are never reordered
    /// or edited after insertion.
    pub fn add_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    /// Restore every field to its initial value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Synthetic greeting inserted once when the transcript is empty.
    pub fn welcome_message(&self) -> ChatMessage {
        ChatMessage::ai(format!(
            "Hello! I've read the {} rulebook and I'm ready to answer \
             your questions. What would you like to know?",
            self.game_name
        ))
    }

    /// Insert the greeting on the true empty-to-nonempty transition of the
    /// transcript. A no-op once any message exists or before a game name
    /// is set, so re-running never duplicates it.
    pub fn ensure_welcome(&mut self) {
        if self.messages.is_empty() && !self.game_name.is_empty() {
            let welcome = self.welcome_message();
            self.add_message(welcome);
        }
    }

    /// Fold an `/ask` outcome into the transcript: the answer with its
    /// sources on success, the fixed fallback reply on failure. Clears the
    /// loading flag on both paths.
    pub fn resolve_ask(&mut self, result: Result<AskResponse, ApiError>) {
        let reply = match result {
            Ok(resp) => ChatMessage::ai_with_sources(resp.answer, resp.sources),
            Err(_) => ChatMessage::ai(ASK_FALLBACK),
        };
        self.add_message(reply);
        self.is_loading = false;
    }

    /// Whether any user message has been sent yet. Drives the
    /// suggested-question chips on the chat page.
    pub fn has_user_messages(&self) -> bool {
        self.messages.iter().any(|m| m.kind == MessageKind::User)
    }
}

/// A single chat transcript entry.
#[derive(Clone, Debug)]
pub struct ChatMessage {
    /// Client-generated rendering key, unique with high probability.
    pub id: String,
    pub kind: MessageKind,
    pub content: String,
    /// Rulebook citations, present only on AI answers that carry them.
    pub sources: Option<Vec<SourceRef>>,
    /// Client capture time in epoch milliseconds, not server time.
    pub timestamp: f64,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageKind::User, content, None)
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self::new(MessageKind::Ai, content, None)
    }

    pub fn ai_with_sources(content: impl Into<String>, sources: Option<Vec<SourceRef>>) -> Self {
        Self::new(MessageKind::Ai, content, sources)
    }

    fn new(kind: MessageKind, content: impl Into<String>, sources: Option<Vec<SourceRef>>) -> Self {
        Self {
            id: generate_message_id(),
            kind,
            content: content.into(),
            sources,
            timestamp: crate::net::api::now_ms(),
        }
    }
}

/// Who authored a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    User,
    Ai,
}
