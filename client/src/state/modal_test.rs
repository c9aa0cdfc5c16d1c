use super::*;

#[test]
fn modal_starts_closed() {
    let state = ModalState::default();
    assert!(!state.is_open());
    assert!(state.view().is_none());
    assert_eq!(state.active_pill, None);
}

#[test]
fn open_welcome_shows_visualization() {
    let mut state = ModalState::default();
    state.open_welcome();
    let view = state.view().unwrap();
    assert_eq!(view.title, "Interactive Demo");
    assert_eq!(view.body, ModalBody::Welcome);
    assert!(view.show_visualization);
}

#[test]
fn open_topic_hides_visualization_and_marks_pill() {
    let mut state = ModalState::default();
    assert!(state.open_topic("Traversal"));
    let view = state.view().unwrap();
    assert_eq!(view.title, "Traversal Operation");
    assert!(!view.show_visualization);
    assert_eq!(state.active_pill, Some("Traversal"));
    match view.body {
        ModalBody::Topic(e) => assert_eq!(e.complexity, "O(n) time complexity"),
        ModalBody::Welcome => panic!("expected topic body"),
    }
}

#[test]
fn open_topic_miss_is_silent_noop() {
    let mut state = ModalState::default();
    state.open_welcome();
    let before = state.clone();
    assert!(!state.open_topic("Circular buffer"));
    assert_eq!(state, before);
}

#[test]
fn close_hides_modal_and_keeps_active_pill() {
    let mut state = ModalState::default();
    state.open_topic("Deletion");
    state.close();
    assert!(!state.is_open());
    assert_eq!(state.active_pill, Some("Deletion"));
}

#[test]
fn switching_pills_moves_highlight() {
    let mut state = ModalState::default();
    state.open_topic("Head node");
    state.open_topic("Searching");
    assert_eq!(state.active_pill, Some("Searching"));
}

// =============================================================
// code toggle
// =============================================================

#[test]
fn code_is_hidden_by_default_and_toggles() {
    let mut state = ModalState::default();
    state.open_topic("Insertion");
    assert!(!state.code_visible);
    assert_eq!(state.code_toggle_label(), "💻 Show Syntax");

    state.toggle_code();
    assert!(state.code_visible);
    assert_eq!(state.code_toggle_label(), "💻 Hide Syntax");

    state.toggle_code();
    assert!(!state.code_visible);
}

#[test]
fn reopening_a_topic_hides_code_again() {
    let mut state = ModalState::default();
    state.open_topic("Insertion");
    state.toggle_code();
    state.close();
    state.open_topic("Insertion");
    assert!(!state.code_visible);
}

#[test]
fn toggle_code_ignored_without_snippet() {
    let mut state = ModalState::default();
    state.open_topic("Cache unfriendly");
    state.toggle_code();
    assert!(!state.code_visible);

    state.open_welcome();
    state.toggle_code();
    assert!(!state.code_visible);
}
