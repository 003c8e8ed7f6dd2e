//! Navigation state machine behind the composition root.
//!
//! DESIGN
//! ======
//! Every path change bumps a generation counter. A lazy load is identified by
//! a `LoadTicket` carrying the generation that started it; completions from
//! older generations still populate the view cache but never change what is
//! displayed, so a slow earlier load cannot overwrite a later navigation.

#[cfg(test)]
#[path = "outlet_test.rs"]
mod outlet_test;

use super::registry::{ViewLoadError, ViewRegistry};

/// What the composition root renders right now. Exactly one state is active.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutletState<V> {
    /// The matched view's code is being acquired.
    Loading { path: String },
    /// The matched view is ready.
    Resolved { path: String, view: V },
    /// No registry entry matches the path.
    Unmatched { path: String },
    /// The matched view failed to load; the next navigation retries.
    Failed { error: ViewLoadError },
}

impl<V> OutletState<V> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn resolved_view(&self) -> Option<&V> {
        match self {
            Self::Resolved { view, .. } => Some(view),
            _ => None,
        }
    }
}

/// Identifies one pending lazy load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub index: usize,
}

/// Follow-up work requested by `Outlet::navigate`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// The state is final for this path.
    Settled,
    /// The caller must run the entry's loader and report back via `complete`.
    Load(LoadTicket),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outlet<V> {
    state: OutletState<V>,
    generation: u64,
}

impl<V: Copy> Default for Outlet<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Copy> Outlet<V> {
    pub fn new() -> Self {
        Self { state: OutletState::Unmatched { path: String::new() }, generation: 0 }
    }

    pub fn state(&self) -> &OutletState<V> {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Enter the state for `path`, abandoning any load still pending.
    pub fn navigate(&mut self, path: &str, registry: &ViewRegistry<V>) -> Navigation {
        self.generation += 1;
        let Some((index, entry)) = registry.find(path) else {
            log::debug!("no module registered for {path}");
            self.state = OutletState::Unmatched { path: path.to_owned() };
            return Navigation::Settled;
        };

        if let Some(view) = entry.view.cached() {
            self.state = OutletState::Resolved { path: path.to_owned(), view };
            return Navigation::Settled;
        }

        self.state = OutletState::Loading { path: path.to_owned() };
        Navigation::Load(LoadTicket { generation: self.generation, index })
    }

    /// Apply a finished load. Returns `true` when the displayed state changed.
    pub fn complete(
        &mut self,
        ticket: LoadTicket,
        result: Result<V, ViewLoadError>,
        registry: &ViewRegistry<V>,
    ) -> bool {
        let Some(entry) = registry.entry(ticket.index) else {
            return false;
        };
        let result = result.map(|view| entry.view.store(view));

        if ticket.generation != self.generation {
            log::debug!("stale load for {} dropped", entry.path);
            return false;
        }

        self.state = match result {
            Ok(view) => OutletState::Resolved { path: entry.path.to_owned(), view },
            Err(error) => {
                log::warn!("{error}");
                OutletState::Failed { error }
            }
        };
        true
    }
}
