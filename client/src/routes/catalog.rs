//! The POS module table: which dashboard lives at which path.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::sync::LazyLock;

use futures::FutureExt as _;
use futures::future::LocalBoxFuture;
use leptos::prelude::*;

use super::registry::{RouteEntry, ViewLoadError, ViewRegistry};
use crate::pages::{
    admin::AdminDashboard, cashier::CashierDashboard, kitchen::KitchenDashboard, waiter::WaiterDashboard,
};

/// Renderable unit produced by a route's deferred loader.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewId {
    Waiter,
    Kitchen,
    Cashier,
    Admin,
}

impl ViewId {
    pub fn render(self) -> AnyView {
        match self {
            Self::Waiter => view! { <WaiterDashboard/> }.into_any(),
            Self::Kitchen => view! { <KitchenDashboard/> }.into_any(),
            Self::Cashier => view! { <CashierDashboard/> }.into_any(),
            Self::Admin => view! { <AdminDashboard/> }.into_any(),
        }
    }
}

fn ready(view: ViewId) -> LocalBoxFuture<'static, Result<ViewId, ViewLoadError>> {
    async move { Ok(view) }.boxed_local()
}

/// Registry backing both the sidebar menu and path resolution.
pub static APP_ROUTES: LazyLock<ViewRegistry<ViewId>> = LazyLock::new(|| {
    ViewRegistry::new(vec![
        RouteEntry::new("/mozo", "Mozo", || ready(ViewId::Waiter)),
        RouteEntry::new("/cocina", "Cocina", || ready(ViewId::Kitchen)),
        RouteEntry::new("/caja", "Caja", || ready(ViewId::Cashier)),
        RouteEntry::new("/admin", "Administración", || ready(ViewId::Admin)),
    ])
});

pub fn app_routes() -> &'static ViewRegistry<ViewId> {
    &APP_ROUTES
}
