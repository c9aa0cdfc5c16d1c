//! Topic cards with clickable pills.

use leptos::prelude::*;

use crate::content::{GROUPS, Topic, TopicGroup};
use crate::state::modal::ModalState;

/// One card per topic group; clicking a pill opens its explanation.
#[component]
pub fn PillSections() -> impl IntoView {
    view! {
        <section class="topics">
            {GROUPS.iter().map(|group| view! { <TopicCard group=group/> }).collect_view()}
        </section>
    }
}

#[component]
fn TopicCard(group: &'static TopicGroup) -> impl IntoView {
    view! {
        <div class="topic-card animate-on-scroll">
            <h2 class="topic-card__title">
                <span class="topic-card__icon">{group.icon}</span>
                {group.title}
            </h2>
            <div class="pills">
                {group.topics.iter().map(|topic| view! { <Pill topic=topic/> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Pill(topic: &'static Topic) -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();
    let label = topic.label;

    view! {
        <button
            class="pill"
            class:active=move || modal.with(|m| m.active_pill == Some(label))
            on:click=move |_| {
                modal.update(|m| {
                    m.open_topic(label);
                });
            }
        >
            {label}
        </button>
    }
}
