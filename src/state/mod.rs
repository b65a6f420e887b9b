//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The whole app shares a single `GameState` store provided via context at
//! the root, mirroring the one session the backend holds per rulebook.
//! `flow` keeps the screen-precondition guard next to the state it reads.

pub mod flow;
pub mod game;
