#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use super::game::GameState;

/// The four screens of the app, in flow order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Home,
    NameEntry,
    Upload,
    Chat,
}

impl Screen {
    /// Route path for client-side navigation.
    pub fn path(self) -> &'static str {
        match self {
            Screen::Home => "/",
            Screen::NameEntry => "/game",
            Screen::Upload => "/upload",
            Screen::Chat => "/chat",
        }
    }
}

/// Outcome of a screen-precondition check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    Allowed,
    RedirectTo(Screen),
}

/// Evaluate whether `screen` may be shown given the current store.
///
/// Called once per page mount so every screen enforces its preconditions
/// at the same point in its lifecycle. Missing preconditions redirect to
/// the earliest screen that can satisfy them instead of reaching the
/// backend with an unset identifier.
pub fn check(screen: Screen, state: &GameState) -> Guard {
    match screen {
        Screen::Home | Screen::NameEntry => Guard::Allowed,
        Screen::Upload => {
            if state.game_name.is_empty() {
                Guard::RedirectTo(Screen::NameEntry)
            } else {
                Guard::Allowed
            }
        }
        Screen::Chat => {
            if state.game_name.is_empty() {
                Guard::RedirectTo(Screen::NameEntry)
            } else if state.session_id.is_empty() {
                Guard::RedirectTo(Screen::Upload)
            } else {
                Guard::Allowed
            }
        }
    }
}
