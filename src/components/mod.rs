//! Reusable view components.

pub mod chat_bubble;
pub mod loading_dots;
