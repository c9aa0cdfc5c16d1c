//! Page footer with the current year.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let year = move || ui.with(|u| u.current_year.map(|y| y.to_string()).unwrap_or_default());

    view! {
        <footer class="site-footer">
            <p>
                "© "
                <span id="current-year">{year}</span>
                " Singly Linked List Explorer. Press I, D, T or R to drive the demo."
            </p>
        </footer>
    }
}
