//! Interactive node-box visualization with its controls.
//!
//! ARCHITECTURE
//! ============
//! `ListState` decides what happens; `ListDriver` turns the returned steps
//! into timers and owns their handles. Starting any action drops the
//! previous handles so nothing from an older action fires late.

#[cfg(test)]
#[path = "list_demo_test.rs"]
mod list_demo_test;

use leptos::prelude::*;

use crate::state::list::{ListState, NodeView, Scheduled};
use crate::util::random;
use crate::util::shortcuts::LEGEND;
use crate::util::timers::TimerSet;

#[cfg(feature = "hydrate")]
type TimerStorage = LocalStorage;
#[cfg(not(feature = "hydrate"))]
type TimerStorage = SyncStorage;

/// Runs list actions and their animation timers. Provided via context so
/// the buttons and the keyboard shortcuts share one timer set.
#[derive(Clone, Copy)]
pub struct ListDriver {
    list: RwSignal<ListState>,
    timers: StoredValue<TimerSet, TimerStorage>,
}

impl ListDriver {
    pub fn new(list: RwSignal<ListState>) -> Self {
        Self { list, timers: StoredValue::new_with_storage(TimerSet::default()) }
    }

    pub fn append(self) {
        let value = random::node_value();
        self.run(|state| state.append(value));
    }

    pub fn remove_last(self) {
        self.run(ListState::remove_last);
    }

    pub fn traverse(self) {
        self.run(ListState::traverse);
    }

    pub fn reset(self) {
        self.run(|state| {
            state.reset();
            Vec::new()
        });
    }

    fn run(self, action: impl FnOnce(&mut ListState) -> Vec<Scheduled>) {
        let mut steps = Vec::new();
        self.list.update(|state| steps = action(state));

        let list = self.list;
        self.timers.update_value(|timers| {
            timers.cancel_all();
            for scheduled in steps {
                timers.schedule(scheduled.delay_ms, move || {
                    let _ = list.try_update(|state| state.apply(scheduled));
                });
            }
        });
    }
}

/// Node boxes plus insert/delete/traverse/reset controls.
#[component]
pub fn ListDemo() -> impl IntoView {
    let list = expect_context::<RwSignal<ListState>>();
    let driver = expect_context::<ListDriver>();

    view! {
        <div class="visualization">
            <div class="linked-list" id="linked-list">
                {move || {
                    list.with(ListState::nodes)
                        .into_iter()
                        .map(|node| view! { <NodeBox node=node/> })
                        .collect_view()
                }}
            </div>
            <div class="controls">
                <button id="insert-btn" class="btn" on:click=move |_| driver.append()>
                    "Insert Node"
                </button>
                <button id="delete-btn" class="btn" on:click=move |_| driver.remove_last()>
                    "Delete Node"
                </button>
                <button id="traverse-btn" class="btn" on:click=move |_| driver.traverse()>
                    "Traverse"
                </button>
                <button id="reset-btn" class="btn" on:click=move |_| driver.reset()>
                    "Reset"
                </button>
            </div>
            <div class="shortcut-legend">
                {LEGEND
                    .iter()
                    .map(|(key, action)| {
                        view! {
                            <span class="shortcut-legend__item">
                                <kbd>{*key}</kbd>
                                " "
                                {*action}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn NodeBox(node: NodeView) -> impl IntoView {
    let class = match node.mark.class() {
        Some(extra) => format!("node-box {extra}"),
        None => "node-box".to_owned(),
    };

    view! {
        <div class=class id=format!("node-{}", node.index)>
            "Data: "
            {node.value}
            <br/>
            "Next: "
            {node.next.label()}
        </div>
    }
}
