//! Ordered path -> deferred view table.
//!
//! DESIGN
//! ======
//! Each entry owns a zero-argument factory returning a future of its view.
//! The factory runs on the first navigation to the entry's path; a successful
//! result is kept in a `OnceLock` and reused for the registry's lifetime.
//! The sidebar menu is derived from the same entries, so routing and
//! navigation links cannot drift apart.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::sync::OnceLock;

use futures::future::LocalBoxFuture;

/// Deferred factory producing a view on first use.
pub type ViewLoader<V> = fn() -> LocalBoxFuture<'static, Result<V, ViewLoadError>>;

/// A lazy view failed to load.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("view for {path} failed to load: {reason}")]
pub struct ViewLoadError {
    pub path: String,
    pub reason: String,
}

impl ViewLoadError {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { path: path.into(), reason: reason.into() }
    }
}

/// A view that is loaded on demand and cached after the first success.
pub struct LazyView<V> {
    loader: ViewLoader<V>,
    cached: OnceLock<V>,
}

impl<V: Copy> LazyView<V> {
    pub const fn new(loader: ViewLoader<V>) -> Self {
        Self { loader, cached: OnceLock::new() }
    }

    /// The cached view, if a load has already succeeded.
    pub fn cached(&self) -> Option<V> {
        self.cached.get().copied()
    }

    /// Invoke the deferred factory.
    pub fn load(&self) -> LocalBoxFuture<'static, Result<V, ViewLoadError>> {
        (self.loader)()
    }

    /// Cache a loaded view. The first stored value wins and is returned.
    pub fn store(&self, view: V) -> V {
        *self.cached.get_or_init(|| view)
    }
}

/// One navigable path with its menu label and lazily loaded view.
pub struct RouteEntry<V> {
    pub path: &'static str,
    pub label: &'static str,
    pub view: LazyView<V>,
}

impl<V: Copy> RouteEntry<V> {
    pub const fn new(path: &'static str, label: &'static str, loader: ViewLoader<V>) -> Self {
        Self { path, label, view: LazyView::new(loader) }
    }
}

/// Sidebar link derived from a registry entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuLink {
    pub path: &'static str,
    pub label: &'static str,
}

/// Ordered registry of route entries with unique paths.
pub struct ViewRegistry<V> {
    entries: Vec<RouteEntry<V>>,
}

impl<V: Copy> ViewRegistry<V> {
    /// Build a registry, keeping the first entry for any repeated path.
    pub fn new(entries: Vec<RouteEntry<V>>) -> Self {
        let mut unique: Vec<RouteEntry<V>> = Vec::with_capacity(entries.len());
        for entry in entries {
            if unique.iter().any(|kept| kept.path == entry.path) {
                log::warn!("duplicate route path {} ignored", entry.path);
                continue;
            }
            unique.push(entry);
        }
        Self { entries: unique }
    }

    /// Exact-match lookup; no pattern or parameter matching.
    pub fn find(&self, path: &str) -> Option<(usize, &RouteEntry<V>)> {
        self.entries.iter().enumerate().find(|(_, entry)| entry.path == path)
    }

    pub fn entry(&self, index: usize) -> Option<&RouteEntry<V>> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.path)
    }

    /// Menu links in registration order.
    pub fn menu(&self) -> Vec<MenuLink> {
        self.entries
            .iter()
            .map(|entry| MenuLink { path: entry.path, label: entry.label })
            .collect()
    }
}
