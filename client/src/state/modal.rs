//! Topic/demo modal state.
//!
//! DESIGN
//! ======
//! The modal shows either the fixed welcome message with the visualization
//! panel, or one topic from the content table. Which pill is highlighted and
//! whether the code snippet is expanded live here too so the view stays a pure
//! projection of this struct.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::content::{self, Explanation};

/// Title shown above the welcome message.
pub const WELCOME_TITLE: &str = "Interactive Demo";
pub const WELCOME_HEADING: &str = "Welcome to the Interactive Demo";
pub const WELCOME_TEXT: &str = "Use the controls below to explore how a singly linked list works. Insert nodes, \
    delete them, traverse the list, or reset it to see the operations in action!";

/// What the open modal is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalContent {
    Welcome,
    Topic(&'static str),
}

/// Body of the modal, resolved for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalBody {
    Welcome,
    Topic(&'static Explanation),
}

/// Everything the modal view needs for one render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModalView {
    pub title: &'static str,
    pub body: ModalBody,
    pub show_visualization: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub content: Option<ModalContent>,
    pub code_visible: bool,
    pub active_pill: Option<&'static str>,
}

impl ModalState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }

    /// Open the welcome message with the visualization panel.
    pub fn open_welcome(&mut self) {
        self.content = Some(ModalContent::Welcome);
        self.code_visible = false;
    }

    /// Open the explanation for `label`. Unknown labels leave the state
    /// untouched and return `false`.
    pub fn open_topic(&mut self, label: &str) -> bool {
        let Some(topic) = content::all_topics().find(|t| t.label == label) else {
            return false;
        };
        self.content = Some(ModalContent::Topic(topic.label));
        self.code_visible = false;
        self.active_pill = Some(topic.label);
        true
    }

    /// Hide the modal. The active pill stays highlighted.
    pub fn close(&mut self) {
        self.content = None;
        self.code_visible = false;
    }

    /// Flip snippet visibility. No-op unless a topic with a snippet is open.
    pub fn toggle_code(&mut self) {
        if matches!(self.view().map(|v| v.body), Some(ModalBody::Topic(e)) if e.example_code.is_some()) {
            self.code_visible = !self.code_visible;
        }
    }

    /// Label for the snippet toggle button.
    #[must_use]
    pub fn code_toggle_label(&self) -> &'static str {
        if self.code_visible { "💻 Hide Syntax" } else { "💻 Show Syntax" }
    }

    /// Resolve the open content into a renderable view.
    #[must_use]
    pub fn view(&self) -> Option<ModalView> {
        match self.content? {
            ModalContent::Welcome => Some(ModalView {
                title: WELCOME_TITLE,
                body: ModalBody::Welcome,
                show_visualization: true,
            }),
            ModalContent::Topic(label) => {
                let explanation = content::lookup(label)?;
                Some(ModalView {
                    title: explanation.heading,
                    body: ModalBody::Topic(explanation),
                    show_visualization: false,
                })
            }
        }
    }
}
