//! Top bar with the theme toggle and primary navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header is the only place that opens the demo modal or leaves the page,
//! so both navigation paths live here next to the theme switch.

use leptos::prelude::*;

use crate::state::modal::ModalState;
use crate::state::ui::UiState;

/// Static secondary page reached through the About button.
pub const ABOUT_HREF: &str = "about.html";

#[component]
pub fn SiteHeader() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let modal = expect_context::<RwSignal<ModalState>>();

    let on_about = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href(ABOUT_HREF);
            }
        }
    };

    view! {
        <header class="site-header">
            <div class="site-header__brand">
                <span class="site-header__logo">"⛓"</span>
                <h1>"Singly Linked List"</h1>
            </div>
            <nav class="site-header__nav">
                <button id="explore-btn" class="btn btn--primary" on:click=move |_| modal.update(ModalState::open_welcome)>
                    "Explore"
                </button>
                <button id="about-btn" class="btn" on:click=on_about>
                    "About"
                </button>
                <button
                    id="theme-toggle"
                    class="btn site-header__theme-toggle"
                    on:click=move |_| {
                        let next = crate::util::theme::toggle(ui.get().theme);
                        ui.update(|u| u.theme = next);
                    }
                    title="Toggle theme"
                >
                    {move || ui.get().theme.toggle_icon()}
                </button>
            </nav>
        </header>
    }
}
