use super::*;

#[test]
fn letter_keys_map_to_list_actions() {
    assert_eq!(shortcut_for_key("i"), Some(Shortcut::Append));
    assert_eq!(shortcut_for_key("d"), Some(Shortcut::RemoveLast));
    assert_eq!(shortcut_for_key("t"), Some(Shortcut::Traverse));
    assert_eq!(shortcut_for_key("r"), Some(Shortcut::Reset));
}

#[test]
fn letter_keys_ignore_case() {
    assert_eq!(shortcut_for_key("I"), Some(Shortcut::Append));
    assert_eq!(shortcut_for_key("D"), Some(Shortcut::RemoveLast));
    assert_eq!(shortcut_for_key("T"), Some(Shortcut::Traverse));
    assert_eq!(shortcut_for_key("R"), Some(Shortcut::Reset));
}

#[test]
fn escape_closes_modal() {
    assert_eq!(shortcut_for_key("Escape"), Some(Shortcut::CloseModal));
}

#[test]
fn other_keys_are_ignored() {
    for key in ["a", "x", "Enter", " ", "", "ArrowLeft", "escape", "ii"] {
        assert_eq!(shortcut_for_key(key), None, "{key:?}");
    }
}

#[test]
fn legend_lists_every_letter_shortcut() {
    for (key, _) in LEGEND {
        assert!(shortcut_for_key(key).is_some(), "{key}");
    }
    assert_eq!(LEGEND.len(), 4);
}
