//! Composition root: resolves the current path and renders its module.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router only supplies the pathname; matching, lazy loading, and the
//! loading/unmatched/failed placeholders are owned by `routes::outlet`.
//! Loads are spawned in the browser only, so SSR renders the loading
//! placeholder for module paths and hydration resolves them.

#[cfg(test)]
#[path = "module_outlet_test.rs"]
mod module_outlet_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routes::catalog::{ViewId, app_routes};
use crate::routes::outlet::{Navigation, Outlet, OutletState};

pub const LOADING_MESSAGE: &str = "Cargando...";
pub const UNMATCHED_MESSAGE: &str = "Seleccione un módulo";
pub const FAILED_MESSAGE: &str = "No se pudo cargar el módulo";

/// Which placeholder (if any) a state renders instead of a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placeholder {
    Loading,
    Unmatched,
    Failed,
}

impl Placeholder {
    pub fn message(self) -> &'static str {
        match self {
            Self::Loading => LOADING_MESSAGE,
            Self::Unmatched => UNMATCHED_MESSAGE,
            Self::Failed => FAILED_MESSAGE,
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Loading => "placeholder placeholder--loading",
            Self::Unmatched => "placeholder",
            Self::Failed => "placeholder placeholder--error",
        }
    }
}

/// Placeholder for a state, or `None` when a view is resolved.
pub fn placeholder_for<V>(state: &OutletState<V>) -> Option<Placeholder> {
    match state {
        OutletState::Loading { .. } => Some(Placeholder::Loading),
        OutletState::Unmatched { .. } => Some(Placeholder::Unmatched),
        OutletState::Failed { .. } => Some(Placeholder::Failed),
        OutletState::Resolved { .. } => None,
    }
}

/// Renders the module registered for the current path.
#[component]
pub fn ModuleOutlet() -> impl IntoView {
    let location = use_location();
    let registry = app_routes();

    let mut initial = Outlet::new();
    let _ = initial.navigate(&location.pathname.get_untracked(), registry);
    let outlet = RwSignal::new(initial);

    Effect::new(move || {
        let path = location.pathname.get();
        let mut step = Navigation::Settled;
        outlet.update(|o| step = o.navigate(&path, registry));
        if let Navigation::Load(ticket) = step {
            spawn_load(outlet, ticket);
        }
    });

    move || outlet.with(|o| render_state(o.state()))
}

#[cfg(feature = "hydrate")]
fn spawn_load(outlet: RwSignal<Outlet<ViewId>>, ticket: crate::routes::outlet::LoadTicket) {
    let registry = app_routes();
    let Some(entry) = registry.entry(ticket.index) else {
        return;
    };
    let pending = entry.view.load();
    leptos::task::spawn_local(async move {
        let result = pending.await;
        outlet.update(|o| {
            o.complete(ticket, result, registry);
        });
    });
}

#[cfg(not(feature = "hydrate"))]
fn spawn_load(outlet: RwSignal<Outlet<ViewId>>, ticket: crate::routes::outlet::LoadTicket) {
    let _ = (outlet, ticket);
}

fn render_state(state: &OutletState<ViewId>) -> AnyView {
    if let OutletState::Resolved { view, .. } = state {
        return view.render();
    }
    let placeholder = placeholder_for(state).unwrap_or(Placeholder::Unmatched);
    let detail = match state {
        OutletState::Failed { error } => Some(error.to_string()),
        _ => None,
    };
    view! {
        <div class=placeholder.class()>
            <p>{placeholder.message()}</p>
            {detail.map(|text| view! { <small>{text}</small> })}
        </div>
    }
    .into_any()
}
