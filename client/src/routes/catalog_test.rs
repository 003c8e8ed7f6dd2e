use super::*;
use crate::routes::outlet::{Navigation, Outlet, OutletState};
use crate::routes::registry::MenuLink;
use futures::executor::block_on;

fn resolve(path: &str) -> OutletState<ViewId> {
    let registry = app_routes();
    let mut outlet = Outlet::new();
    if let Navigation::Load(ticket) = outlet.navigate(path, registry) {
        let entry = registry.entry(ticket.index).expect("ticket index is valid");
        let result = block_on(entry.view.load());
        outlet.complete(ticket, result, registry);
    }
    outlet.state().clone()
}

// =============================================================
// Path -> view
// =============================================================

#[test]
fn each_module_path_resolves_to_its_own_view() {
    let expected = [
        ("/mozo", ViewId::Waiter),
        ("/cocina", ViewId::Kitchen),
        ("/caja", ViewId::Cashier),
        ("/admin", ViewId::Admin),
    ];
    for (path, view) in expected {
        assert_eq!(
            resolve(path),
            OutletState::Resolved { path: path.to_owned(), view },
            "wrong view for {path}"
        );
    }
}

#[test]
fn unknown_paths_fall_back_to_unmatched() {
    for path in ["/", "/mesas", "/MOZO", "/caja/1"] {
        assert_eq!(resolve(path), OutletState::Unmatched { path: path.to_owned() });
    }
}

// =============================================================
// Menu
// =============================================================

#[test]
fn menu_is_derived_from_route_table() {
    assert_eq!(
        app_routes().menu(),
        vec![
            MenuLink { path: "/mozo", label: "Mozo" },
            MenuLink { path: "/cocina", label: "Cocina" },
            MenuLink { path: "/caja", label: "Caja" },
            MenuLink { path: "/admin", label: "Administración" },
        ]
    );
}

#[test]
fn every_menu_link_is_routable() {
    for link in app_routes().menu() {
        assert!(app_routes().find(link.path).is_some(), "{} has no route", link.path);
    }
}
