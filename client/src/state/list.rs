//! Toy linked-list visualization state.
//!
//! DESIGN
//! ======
//! The panel is a plain ordered sequence of values rendered as node boxes.
//! Animations are expressed as [`Scheduled`] steps that the view turns into
//! timers; every step carries the epoch of the action that produced it so a
//! newer action makes older steps inert.
//!
//! TRADE-OFFS
//! ==========
//! A new action settles the previous one instead of queueing behind it: a
//! removal still fading out is committed immediately and transient marks are
//! cleared. The sequence never depends on timer ordering.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

/// Sequence shown on page load and after a reset.
pub const DEFAULT_VALUES: [u32; 3] = [10, 20, 30];
/// Smallest value produced for an appended node.
pub const VALUE_MIN: u32 = 1;
/// Largest value produced for an appended node.
pub const VALUE_MAX: u32 = 100;

/// How long a freshly appended box keeps its "entering" style.
pub const ENTER_MS: u32 = 500;
/// How long the last box shows its "leaving" style before it is removed.
pub const LEAVE_MS: u32 = 500;
/// Delay between consecutive boxes during a traversal.
pub const TRAVERSE_STEP_MS: u32 = 500;
/// How long each box stays highlighted during a traversal.
pub const HIGHLIGHT_MS: u32 = 300;

/// Transient style applied to one node box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeMark {
    #[default]
    Idle,
    Entering,
    Leaving,
    Highlighted,
}

impl NodeMark {
    /// Extra CSS class for the node box, if any.
    #[must_use]
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Entering => Some("inserting"),
            Self::Leaving => Some("deleting"),
            Self::Highlighted => Some("highlighted"),
        }
    }
}

/// What a node box shows in its "Next" line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextLink {
    Arrow,
    Null,
}

impl NextLink {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Arrow => "→",
            Self::Null => "null",
        }
    }
}

/// Render projection of one entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeView {
    pub index: usize,
    pub value: u32,
    pub next: NextLink,
    pub mark: NodeMark,
}

/// Deferred animation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Drop the "entering" style from the appended box.
    ClearEntering,
    /// Pop the box that was marked as leaving.
    CommitRemoval,
    HighlightOn(usize),
    HighlightOff(usize),
}

/// A step to run after `delay_ms`, tagged with the epoch that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheduled {
    pub epoch: u64,
    pub delay_ms: u32,
    pub step: Step,
}

/// State of the visualization panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListState {
    values: Vec<u32>,
    entering: Option<usize>,
    leaving: Option<usize>,
    highlighted: Option<usize>,
    epoch: u64,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            values: DEFAULT_VALUES.to_vec(),
            entering: None,
            leaving: None,
            highlighted: None,
            epoch: 0,
        }
    }
}

impl ListState {
    /// Current values in list order.
    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Epoch of the most recent action.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Append `value` (clamped into `VALUE_MIN..=VALUE_MAX`) and mark the new
    /// box as entering.
    pub fn append(&mut self, value: u32) -> Vec<Scheduled> {
        self.begin_action();
        self.values.push(value.clamp(VALUE_MIN, VALUE_MAX));
        self.entering = Some(self.values.len() - 1);
        vec![self.schedule(ENTER_MS, Step::ClearEntering)]
    }

    /// Mark the last box as leaving. The value is popped when the returned
    /// step runs. Empty lists are left alone and nothing is scheduled.
    pub fn remove_last(&mut self) -> Vec<Scheduled> {
        self.begin_action();
        if self.values.is_empty() {
            return Vec::new();
        }
        self.leaving = Some(self.values.len() - 1);
        vec![self.schedule(LEAVE_MS, Step::CommitRemoval)]
    }

    /// Highlight every box in order without touching the values.
    pub fn traverse(&mut self) -> Vec<Scheduled> {
        self.begin_action();
        let mut steps = Vec::with_capacity(self.values.len() * 2);
        let mut start = 0_u32;
        for index in 0..self.values.len() {
            steps.push(self.schedule(start, Step::HighlightOn(index)));
            steps.push(self.schedule(start.saturating_add(HIGHLIGHT_MS), Step::HighlightOff(index)));
            start = start.saturating_add(TRAVERSE_STEP_MS);
        }
        steps
    }

    /// Restore the default sequence immediately.
    pub fn reset(&mut self) {
        self.begin_action();
        self.values = DEFAULT_VALUES.to_vec();
    }

    /// Run a scheduled step. Returns `false` when the step belongs to an
    /// action that has since been superseded.
    pub fn apply(&mut self, scheduled: Scheduled) -> bool {
        if scheduled.epoch != self.epoch {
            return false;
        }
        match scheduled.step {
            Step::ClearEntering => self.entering = None,
            Step::CommitRemoval => {
                if self.leaving.take().is_some() {
                    self.values.pop();
                }
            }
            Step::HighlightOn(index) => {
                if index < self.values.len() {
                    self.highlighted = Some(index);
                }
            }
            Step::HighlightOff(index) => {
                if self.highlighted == Some(index) {
                    self.highlighted = None;
                }
            }
        }
        true
    }

    /// Boxes to render, in order.
    #[must_use]
    pub fn nodes(&self) -> Vec<NodeView> {
        let last = self.values.len().saturating_sub(1);
        self.values
            .iter()
            .enumerate()
            .map(|(index, &value)| NodeView {
                index,
                value,
                next: if index < last { NextLink::Arrow } else { NextLink::Null },
                mark: self.mark_for(index),
            })
            .collect()
    }

    fn mark_for(&self, index: usize) -> NodeMark {
        if self.leaving == Some(index) {
            NodeMark::Leaving
        } else if self.entering == Some(index) {
            NodeMark::Entering
        } else if self.highlighted == Some(index) {
            NodeMark::Highlighted
        } else {
            NodeMark::Idle
        }
    }

    /// Finish whatever the previous action left in flight.
    fn settle(&mut self) {
        if self.leaving.take().is_some() {
            self.values.pop();
        }
        self.entering = None;
        self.highlighted = None;
    }

    fn begin_action(&mut self) {
        self.settle();
        self.epoch += 1;
    }

    fn schedule(&self, delay_ms: u32, step: Step) -> Scheduled {
        Scheduled { epoch: self.epoch, delay_ms, step }
    }
}
