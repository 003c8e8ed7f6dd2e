//! Root application component with routing and the persistent layout.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::{APP_TITLE, AppLayout};
use crate::components::module_outlet::{ModuleOutlet, UNMATCHED_MESSAGE};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
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
/// The router only captures the pathname; `ModuleOutlet` resolves it against
/// the module registry, so every path is routed to the same outlet.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/cafeteria-pos.css"/>
        <Title text=APP_TITLE/>

        <Router>
            <AppLayout>
                <Routes fallback=|| UNMATCHED_MESSAGE.into_view()>
                    <Route path=StaticSegment("") view=ModuleOutlet/>
                    <Route path=WildcardSegment("module") view=ModuleOutlet/>
                </Routes>
            </AppLayout>
        </Router>
    }
}
