//! Global keyboard shortcuts for the demo.
//!
//! Single keys, matched case-insensitively and regardless of modifiers or
//! focus: `i` append, `d` remove, `t` traverse, `r` reset, `Escape` closes
//! the modal.

#[cfg(test)]
#[path = "shortcuts_test.rs"]
mod shortcuts_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    Append,
    RemoveLast,
    Traverse,
    Reset,
    CloseModal,
}

/// Rows for the shortcut legend under the demo controls.
pub const LEGEND: &[(&str, &str)] = &[("I", "Insert"), ("D", "Delete"), ("T", "Traverse"), ("R", "Reset")];

/// Map a `KeyboardEvent.key` value to a shortcut.
#[must_use]
pub fn shortcut_for_key(key: &str) -> Option<Shortcut> {
    if key == "Escape" {
        return Some(Shortcut::CloseModal);
    }
    match key.to_lowercase().as_str() {
        "i" => Some(Shortcut::Append),
        "d" => Some(Shortcut::RemoveLast),
        "t" => Some(Shortcut::Traverse),
        "r" => Some(Shortcut::Reset),
        _ => None,
    }
}
