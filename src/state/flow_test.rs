use super::*;

fn state(game_name: &str, session_id: &str) -> GameState {
    let mut s = GameState::default();
    s.set_game_name(game_name);
    s.set_session_id(session_id);
    s
}

// =============================================================
// Unconditional screens
// =============================================================

#[test]
fn home_and_name_entry_are_always_allowed() {
    let empty = GameState::default();
    assert_eq!(check(Screen::Home, &empty), Guard::Allowed);
    assert_eq!(check(Screen::NameEntry, &empty), Guard::Allowed);

    let full = state("Catan", "abc123");
    assert_eq!(check(Screen::Home, &full), Guard::Allowed);
    assert_eq!(check(Screen::NameEntry, &full), Guard::Allowed);
}

// =============================================================
// Upload guard
// =============================================================

#[test]
fn upload_requires_game_name() {
    assert_eq!(
        check(Screen::Upload, &GameState::default()),
        Guard::RedirectTo(Screen::NameEntry)
    );
    assert_eq!(check(Screen::Upload, &state("Catan", "")), Guard::Allowed);
}

// =============================================================
// Chat guard
// =============================================================

#[test]
fn chat_without_game_name_redirects_to_name_entry() {
    assert_eq!(
        check(Screen::Chat, &GameState::default()),
        Guard::RedirectTo(Screen::NameEntry)
    );
}

#[test]
fn chat_without_session_redirects_to_upload() {
    assert_eq!(
        check(Screen::Chat, &state("Catan", "")),
        Guard::RedirectTo(Screen::Upload)
    );
}

#[test]
fn chat_with_full_session_is_allowed() {
    assert_eq!(check(Screen::Chat, &state("Catan", "abc123")), Guard::Allowed);
}

// =============================================================
// Route paths
// =============================================================

#[test]
fn screen_paths_match_routes() {
    assert_eq!(Screen::Home.path(), "/");
    assert_eq!(Screen::NameEntry.path(), "/game");
    assert_eq!(Screen::Upload.path(), "/upload");
    assert_eq!(Screen::Chat.path(), "/chat");
}
