//! Landing page: hero, topic pills, modal and footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page installs the browser-wide behaviors once it is mounted: the
//! scroll reveal observer and the global keyboard shortcuts.

use leptos::prelude::*;

use crate::components::pill_sections::PillSections;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::components::topic_modal::TopicModal;
#[cfg(feature = "hydrate")]
use crate::util::shortcuts::{Shortcut, shortcut_for_key};

#[component]
pub fn HomePage() -> impl IntoView {
    Effect::new(crate::util::reveal::install);

    #[cfg(feature = "hydrate")]
    {
        use crate::components::list_demo::ListDriver;
        use crate::state::modal::ModalState;

        let modal = expect_context::<RwSignal<ModalState>>();
        let driver = expect_context::<ListDriver>();
        let handle = window_event_listener(leptos::ev::keydown, move |ev| match shortcut_for_key(&ev.key()) {
            Some(Shortcut::Append) => driver.append(),
            Some(Shortcut::RemoveLast) => driver.remove_last(),
            Some(Shortcut::Traverse) => driver.traverse(),
            Some(Shortcut::Reset) => driver.reset(),
            Some(Shortcut::CloseModal) => {
                if modal.with_untracked(ModalState::is_open) {
                    modal.update(ModalState::close);
                }
            }
            None => {}
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <div class="page">
            <SiteHeader/>
            <main class="page__main">
                <section class="hero animate-on-scroll">
                    <h2>"What is a singly linked list?"</h2>
                    <p>
                        "A chain of nodes where every node stores a value and a link to the next one. "
                        "Click any pill below to learn more, or press Explore to play with a live list."
                    </p>
                </section>
                <PillSections/>
            </main>
            <TopicModal/>
            <SiteFooter/>
        </div>
    }
}
