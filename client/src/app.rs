//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::list_demo::ListDriver;
use crate::pages::home::HomePage;
use crate::state::{list::ListState, modal::ModalState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let modal = RwSignal::new(ModalState::default());
    let list = RwSignal::new(ListState::default());

    provide_context(ui);
    provide_context(modal);
    provide_context(list);
    provide_context(ListDriver::new(list));

    // Restore the saved theme once running in the browser.
    Effect::new(move || {
        let theme = crate::util::theme::read_preference();
        crate::util::theme::apply(theme);
        let year = crate::util::date::current_year();
        ui.update(|u| {
            u.theme = theme;
            u.current_year = year;
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/listlab.css"/>
        <Title text="Singly Linked List"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
