//! Application shell: routing, shared state contexts, SSR document shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::config::default_config;
use crate::pages::home::HomePage;
use crate::state::config::ConfigState;
use crate::state::logs::LogsState;
use crate::state::ui::UiState;

/// SSR document shell wrapping [`App`].
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

/// Root component: builds the shared state contexts from the injected
/// startup defaults and routes the single host page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let defaults = default_config();
    provide_context(RwSignal::new(ConfigState::from_defaults(&defaults)));
    provide_context(RwSignal::new(LogsState::default()));
    provide_context(RwSignal::new(UiState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/client.css"/>
        <Title text="Trace Viewer Embed Demo"/>
        <Router>
            <Routes fallback=|| "Not found.">
                <Route path=path!("/") view=HomePage/>
            </Routes>
        </Router>
    }
}
