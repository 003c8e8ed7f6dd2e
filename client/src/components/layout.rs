//! Persistent application frame: sidebar navigation plus content slot.
//!
//! ARCHITECTURE
//! ============
//! Menu links come from the same registry the outlet resolves against, so a
//! module cannot appear in the sidebar without being routable (or vice versa).

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::catalog::app_routes;

pub const APP_TITLE: &str = "Cafetería POS";

/// Sidebar + main region wrapping whatever the composition root produces.
#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let links = app_routes().menu();

    view! {
        <div class="layout">
            <aside class="layout__sidebar">
                <h1 class="layout__title">{APP_TITLE}</h1>
                <nav>
                    <ul>
                        {links
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <li>
                                        <A href=link.path>{link.label}</A>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </nav>
            </aside>
            <main class="layout__main">{children()}</main>
        </div>
    }
}
