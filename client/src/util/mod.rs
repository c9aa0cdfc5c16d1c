//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic. Each browser call is gated on `hydrate` with a no-op fallback so the
//! same code renders on the server and runs under native tests.

pub mod date;
pub mod random;
pub mod reveal;
pub mod scroll_lock;
pub mod shortcuts;
pub mod theme;
pub mod timers;

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
