//! Overlay showing a topic explanation or the interactive demo.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::list_demo::ListDemo;
use crate::content::Explanation;
use crate::state::modal::{ModalBody, ModalState, WELCOME_HEADING, WELCOME_TEXT};
use crate::util::scroll_lock;

/// Modal overlay. Closes on backdrop click, the close button, or `Escape`
/// (handled by the page-level shortcut listener).
#[component]
pub fn TopicModal() -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();

    Effect::new(move || scroll_lock::set_locked(modal.with(ModalState::is_open)));

    let is_open = move || modal.with(ModalState::is_open);
    let title = move || modal.with(|m| m.view().map(|v| v.title).unwrap_or_default());
    let shows_demo = move || modal.with(|m| m.view().is_some_and(|v| v.show_visualization));

    view! {
        <div
            id="topic-modal"
            class="modal"
            class:show=is_open
            on:click=move |_| modal.update(ModalState::close)
        >
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <button
                    id="close-modal"
                    class="close-modal"
                    title="Close"
                    on:click=move |_| modal.update(ModalState::close)
                >
                    "×"
                </button>
                <h2 id="modal-title">{title}</h2>
                <div id="modal-explanation">
                    {move || {
                        modal
                            .with(ModalState::view)
                            .map(|current| match current.body {
                                ModalBody::Welcome => welcome_body().into_any(),
                                ModalBody::Topic(explanation) => {
                                    view! { <ExplanationBody explanation=explanation/> }.into_any()
                                }
                            })
                    }}
                </div>
                <Show when=shows_demo>
                    <div id="modal-visualization">
                        <ListDemo/>
                    </div>
                </Show>
            </div>
        </div>
    }
}

fn welcome_body() -> impl IntoView {
    view! {
        <h3>{WELCOME_HEADING}</h3>
        <p>{WELCOME_TEXT}</p>
    }
}

#[component]
fn ExplanationBody(explanation: &'static Explanation) -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();
    let sections = [
        ("📖 Definition", explanation.definition),
        ("⚙️ How It Works", explanation.mechanism),
        ("💡 Example", explanation.analogy),
        ("📊 Complexity", explanation.complexity),
    ];

    view! {
        <div class="explanation-content">
            {sections
                .into_iter()
                .map(|(heading, text)| {
                    view! {
                        <div class="explanation-section">
                            <h3>{heading}</h3>
                            <p>{text}</p>
                        </div>
                    }
                })
                .collect_view()}
            {explanation
                .example_code
                .map(|code| {
                    view! {
                        <button class="btn syntax-btn" on:click=move |_| modal.update(ModalState::toggle_code)>
                            {move || modal.with(ModalState::code_toggle_label)}
                        </button>
                        <div
                            class="explanation-section syntax-section"
                            style:display=move || if modal.with(|m| m.code_visible) { "block" } else { "none" }
                        >
                            <h3>"💻 Syntax"</h3>
                            <pre>
                                <code>{code}</code>
                            </pre>
                        </div>
                    }
                })}
        </div>
    }
}
