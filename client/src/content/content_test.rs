use super::*;

use std::collections::HashSet;

// =============================================================
// lookup
// =============================================================

#[test]
fn every_label_resolves_with_non_empty_fields() {
    for topic in all_topics() {
        let found = lookup(topic.label).unwrap_or_else(|| panic!("missing {}", topic.label));
        assert!(!found.heading.is_empty(), "{}", topic.label);
        assert!(!found.definition.is_empty(), "{}", topic.label);
        assert!(!found.mechanism.is_empty(), "{}", topic.label);
        assert!(!found.analogy.is_empty(), "{}", topic.label);
        assert!(!found.complexity.is_empty(), "{}", topic.label);
        if let Some(code) = found.example_code {
            assert!(!code.trim().is_empty(), "{}", topic.label);
        }
    }
}

#[test]
fn lookup_returns_the_record_for_the_label() {
    let head = lookup("Head node").unwrap();
    assert_eq!(head.heading, "Head Node");
    assert_eq!(head.complexity, "O(1) access time");
    assert!(head.example_code.is_some());
}

#[test]
fn lookup_misses_unknown_labels() {
    assert!(lookup("Skip lists").is_none());
    assert!(lookup("").is_none());
}

#[test]
fn lookup_is_exact_match() {
    assert!(lookup("insertion").is_none());
    assert!(lookup(" Insertion").is_none());
    assert!(lookup("Insertion").is_some());
}

#[test]
fn topics_without_snippets_stay_snippet_free() {
    assert!(lookup("Dynamic size").unwrap().example_code.is_none());
    assert!(lookup("Memory management").unwrap().example_code.is_none());
}

// =============================================================
// table shape
// =============================================================

#[test]
fn labels_are_unique() {
    let mut seen = HashSet::new();
    for topic in all_topics() {
        assert!(seen.insert(topic.label), "duplicate label {}", topic.label);
    }
}

#[test]
fn groups_follow_page_order() {
    let titles = GROUPS.iter().map(|g| g.title).collect::<Vec<_>>();
    assert_eq!(
        titles,
        vec!["Definition", "Structure", "Operations", "Advantages", "Disadvantages", "Applications"]
    );
    assert!(GROUPS.iter().all(|g| !g.topics.is_empty()));
}

#[test]
fn table_has_every_topic() {
    assert_eq!(all_topics().count(), 25);
}
