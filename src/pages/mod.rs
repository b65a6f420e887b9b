//! Page components, one per screen of the name-entry → upload → chat flow.

pub mod chat;
pub mod game;
pub mod home;
pub mod upload;
