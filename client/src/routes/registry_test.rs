use super::*;
use futures::executor::block_on;
use futures::FutureExt as _;
use std::sync::atomic::{AtomicUsize, Ordering};

fn load_one() -> LocalBoxFuture<'static, Result<u8, ViewLoadError>> {
    async { Ok(1) }.boxed_local()
}

fn load_two() -> LocalBoxFuture<'static, Result<u8, ViewLoadError>> {
    async { Ok(2) }.boxed_local()
}

fn sample() -> ViewRegistry<u8> {
    ViewRegistry::new(vec![
        RouteEntry::new("/uno", "Uno", load_one),
        RouteEntry::new("/dos", "Dos", load_two),
    ])
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn find_matches_exact_path() {
    let registry = sample();
    let (index, entry) = registry.find("/dos").expect("registered path");
    assert_eq!(index, 1);
    assert_eq!(entry.label, "Dos");
}

#[test]
fn find_rejects_prefix_and_trailing_slash() {
    let registry = sample();
    assert!(registry.find("/un").is_none());
    assert!(registry.find("/uno/").is_none());
    assert!(registry.find("/uno/extra").is_none());
    assert!(registry.find("").is_none());
}

#[test]
fn duplicate_paths_keep_first_entry() {
    let registry = ViewRegistry::new(vec![
        RouteEntry::new("/uno", "Primero", load_one),
        RouteEntry::new("/uno", "Segundo", load_two),
    ]);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.find("/uno").map(|(_, e)| e.label), Some("Primero"));
}

// =============================================================
// Menu
// =============================================================

#[test]
fn menu_follows_registration_order() {
    let registry = sample();
    assert_eq!(
        registry.menu(),
        vec![MenuLink { path: "/uno", label: "Uno" }, MenuLink { path: "/dos", label: "Dos" }]
    );
    assert_eq!(registry.paths().collect::<Vec<_>>(), vec!["/uno", "/dos"]);
}

// =============================================================
// LazyView
// =============================================================

static COUNTED_LOADS: AtomicUsize = AtomicUsize::new(0);

fn counted_loader() -> LocalBoxFuture<'static, Result<u8, ViewLoadError>> {
    COUNTED_LOADS.fetch_add(1, Ordering::SeqCst);
    async { Ok(7) }.boxed_local()
}

#[test]
fn lazy_view_is_not_loaded_until_asked() {
    let view = LazyView::new(counted_loader);
    assert_eq!(view.cached(), None);
    assert_eq!(COUNTED_LOADS.load(Ordering::SeqCst), 0);

    let loaded = block_on(view.load()).expect("loader succeeds");
    assert_eq!(COUNTED_LOADS.load(Ordering::SeqCst), 1);
    assert_eq!(view.store(loaded), 7);
    assert_eq!(view.cached(), Some(7));
}

#[test]
fn lazy_view_first_store_wins() {
    let view = LazyView::new(load_one);
    assert_eq!(view.store(1), 1);
    assert_eq!(view.store(9), 1);
    assert_eq!(view.cached(), Some(1));
}

#[test]
fn view_load_error_display_names_path() {
    let err = ViewLoadError::new("/caja", "chunk missing");
    assert_eq!(err.to_string(), "view for /caja failed to load: chunk missing");
}
