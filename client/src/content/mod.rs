//! Static topic content shown behind the pills.
//!
//! DESIGN
//! ======
//! The table in `topics` is compile-time data. `lookup` builds a label index
//! once on first use; nothing mutates either afterwards.

mod topics;

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use std::collections::HashMap;
use std::sync::LazyLock;

pub use topics::GROUPS;

/// Explanation record for one pill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Explanation {
    pub heading: &'static str,
    pub definition: &'static str,
    /// "How it works" paragraph.
    pub mechanism: &'static str,
    /// Everyday analogy shown under "Example".
    pub analogy: &'static str,
    pub complexity: &'static str,
    /// Optional Rust snippet revealed by the syntax toggle.
    pub example_code: Option<&'static str>,
}

/// A pill label paired with its explanation.
#[derive(Clone, Copy, Debug)]
pub struct Topic {
    pub label: &'static str,
    pub explanation: Explanation,
}

/// A titled row of pills on the page.
#[derive(Clone, Copy, Debug)]
pub struct TopicGroup {
    pub title: &'static str,
    pub icon: &'static str,
    pub topics: &'static [Topic],
}

static INDEX: LazyLock<HashMap<&'static str, &'static Explanation>> = LazyLock::new(|| {
    GROUPS
        .iter()
        .flat_map(|group| group.topics.iter())
        .map(|topic| (topic.label, &topic.explanation))
        .collect()
});

/// Find the explanation for a pill label. Exact match only.
#[must_use]
pub fn lookup(label: &str) -> Option<&'static Explanation> {
    INDEX.get(label).copied()
}

/// Iterate every topic in page order.
pub fn all_topics() -> impl Iterator<Item = &'static Topic> {
    GROUPS.iter().flat_map(|group| group.topics.iter())
}
