//! Viewport store with explicit observer registration.
//!
//! A view that wants to stay inside the unobstructed area registers a
//! callback; the store invokes it with the recomputed [`Viewport`] on
//! every watched-state change. State is pushed in by whoever observes the
//! client's layout - nothing here reads ambient state.

use crate::config::ChromeMetrics;
use crate::layout::compute_viewport;
use crate::model::{AspectRatio, FilmstripState, LayoutSnapshot, Viewport};
use std::fmt;
use tracing::debug;

/// Opaque handle identifying one observer registration.
///
/// Returned by [`ViewportStore::subscribe`] and consumed by
/// [`ViewportStore::unsubscribe`]. Ids are never reused within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Observer {
    id: SubscriptionId,
    notify: Box<dyn FnMut(Viewport)>,
}

/// Holds the watched layout state and pushes recomputed viewports to
/// registered observers.
///
/// Single-threaded by design: callbacks are plain `FnMut` closures invoked
/// synchronously from the mutating call, in registration order. The store
/// owns its snapshot; callers change it only through [`apply`] and the
/// field-level setters.
///
/// [`apply`]: ViewportStore::apply
pub struct ViewportStore {
    snapshot: LayoutSnapshot,
    metrics: ChromeMetrics,
    viewport: Viewport,
    observers: Vec<Observer>,
    next_id: u64,
}

impl ViewportStore {
    /// Create a store with the default (everything hidden) snapshot.
    pub fn new(metrics: ChromeMetrics) -> Self {
        Self::with_snapshot(metrics, LayoutSnapshot::default())
    }

    /// Create a store with an explicit initial snapshot.
    ///
    /// The initial viewport is computed eagerly, so [`viewport`] is
    /// consistent with the snapshot before any change arrives.
    ///
    /// [`viewport`]: ViewportStore::viewport
    pub fn with_snapshot(metrics: ChromeMetrics, snapshot: LayoutSnapshot) -> Self {
        let viewport = compute_viewport(snapshot, metrics);
        Self {
            snapshot,
            metrics,
            viewport,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Current watched-state snapshot.
    pub fn snapshot(&self) -> LayoutSnapshot {
        self.snapshot
    }

    /// Currently derived viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Chrome metrics in use.
    pub fn metrics(&self) -> ChromeMetrics {
        self.metrics
    }

    /// Register an observer callback.
    ///
    /// The callback is invoked immediately with the current viewport, then
    /// again on every watched-state change until unsubscribed.
    pub fn subscribe<F>(&mut self, mut notify: F) -> SubscriptionId
    where
        F: FnMut(Viewport) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        notify(self.viewport);
        self.observers.push(Observer {
            id,
            notify: Box::new(notify),
        });
        id
    }

    /// Remove an observer registration.
    ///
    /// Returns `false` if the id is unknown or already unsubscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|observer| observer.id != id);
        self.observers.len() != before
    }

    /// Replace the watched snapshot.
    ///
    /// An identical snapshot is a no-op. Otherwise the viewport is
    /// recomputed and every observer is notified with the new value, even
    /// when the derived insets happen to be unchanged - observers track
    /// the watched state, not the output.
    pub fn apply(&mut self, snapshot: LayoutSnapshot) {
        if snapshot == self.snapshot {
            return;
        }
        self.snapshot = snapshot;

        let viewport = compute_viewport(snapshot, self.metrics);
        if viewport != self.viewport {
            debug!(
                right = viewport.right,
                bottom = viewport.bottom,
                "conference viewport changed"
            );
        }
        self.viewport = viewport;

        for observer in &mut self.observers {
            (observer.notify)(viewport);
        }
    }

    /// Set the orientation mode.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: AspectRatio) {
        self.apply(LayoutSnapshot {
            aspect_ratio,
            ..self.snapshot
        });
    }

    /// Set the filmstrip feature state.
    pub fn set_filmstrip(&mut self, filmstrip: FilmstripState) {
        self.apply(LayoutSnapshot {
            filmstrip,
            ..self.snapshot
        });
    }

    /// Set toolbox visibility.
    pub fn set_toolbox_visible(&mut self, toolbox_visible: bool) {
        self.apply(LayoutSnapshot {
            toolbox_visible,
            ..self.snapshot
        });
    }
}

impl fmt::Debug for ViewportStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportStore")
            .field("snapshot", &self.snapshot)
            .field("metrics", &self.metrics)
            .field("viewport", &self.viewport)
            .field("observers", &self.observers.len())
            .finish()
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
