//! Client-side state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each struct here is provided once by `App` as an `RwSignal` and is the
//! single owner of its slice of page state. Components read and update it
//! through context rather than holding their own copies.

pub mod list;
pub mod modal;
pub mod ui;
