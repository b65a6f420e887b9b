//! Small pure helpers shared across pages.

pub mod validate;
