use std::{collections::HashSet, fmt};

use itertools::Itertools;
use tracing::{info, instrument, warn};

use super::{ClickOutcome, Overlay, ReconcilerState, reconcile, toggle_marker};
use crate::Place;

/// The map widget as seen by the reconciler.
///
/// Implementations wrap whatever UI toolkit draws the map. Marker popups are addressed by
/// place id.
pub trait MapSurface {
    /// Ids of the markers currently in the overlay stack, in drawing order.
    fn marker_ids(&self) -> Vec<String>;

    /// Whether the popup of marker `id` is currently visible.
    fn is_info_window_shown(&self, id: &str) -> bool;

    fn show_info_window(&mut self, id: &str);

    fn close_info_window(&mut self, id: &str);

    /// Drop every overlay. Popups that are still open are not closed by this call.
    fn clear_overlays(&mut self);

    fn add_overlay(&mut self, overlay: Overlay);

    /// Request a repaint after the overlay stack changed.
    fn invalidate(&mut self) {}
}

/// Drives a [`MapSurface`] from place lists and marker clicks.
///
/// Owns the [`ReconcilerState`] of one map view; dropping the reconciler drops the state.
#[derive(Debug)]
pub struct MarkerReconciler<S: MapSurface> {
    surface: S,
    state: ReconcilerState,
}

impl<S: MapSurface> MarkerReconciler<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            state: ReconcilerState::new(),
        }
    }

    pub fn state(&self) -> &ReconcilerState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Replace the overlay stack with markers for `places`.
    ///
    /// Every popup of the previous markers is closed before the overlays are cleared,
    /// otherwise some toolkits keep drawing a popup with no marker under it.
    #[instrument(name = "Redraw markers", skip_all, fields(places = places.len()), level = "debug")]
    pub fn redraw(&mut self, places: &[Place]) -> &ReconcilerState {
        for id in self.surface.marker_ids() {
            self.surface.close_info_window(&id);
        }
        self.surface.clear_overlays();

        let plan = reconcile(places, &self.state);
        for overlay in plan.overlays {
            let open_id = overlay
                .as_marker()
                .filter(|marker| marker.info_window_open)
                .map(|marker| marker.id.clone());
            self.surface.add_overlay(overlay);
            if let Some(id) = open_id {
                self.surface.show_info_window(&id);
            }
        }
        self.state = plan.state;
        self.surface.invalidate();

        info!(
            markers = places.len(),
            open = ?self.state.open_place_id(),
            "Markers redrawn"
        );
        &self.state
    }

    /// Handle a tap on marker `id`. Returns `None` if no such marker is drawn.
    pub fn click(&mut self, id: &str) -> Option<ClickOutcome> {
        if !self.surface.marker_ids().iter().any(|marker| marker == id) {
            warn!(id, "Click on a marker that is not drawn");
            return None;
        }

        let shown = self.surface.is_info_window_shown(id);
        let (state, outcome) = toggle_marker(id, shown);
        match outcome {
            ClickOutcome::Opened => self.surface.show_info_window(id),
            ClickOutcome::Closed => self.surface.close_info_window(id),
        }
        self.state = state;
        Some(outcome)
    }
}

/// Headless [`MapSurface`] that keeps the overlay stack in memory.
///
/// Like the toolkits it stands in for, clearing overlays leaves open popups behind; these
/// show up in [`InMemoryMap::orphaned_popups`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryMap {
    overlays: Vec<Overlay>,
    shown: HashSet<String>,
    repaints: usize,
}

impl InMemoryMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }

    /// Ids of markers whose popup is visible, in drawing order.
    #[must_use]
    pub fn open_popups(&self) -> Vec<&str> {
        self.overlays
            .iter()
            .filter_map(Overlay::as_marker)
            .map(|marker| marker.id.as_str())
            .filter(|id| self.shown.contains(*id))
            .collect()
    }

    /// Popups still visible although their marker is gone.
    #[must_use]
    pub fn orphaned_popups(&self) -> Vec<&str> {
        let drawn: HashSet<&str> = self
            .overlays
            .iter()
            .filter_map(Overlay::as_marker)
            .map(|marker| marker.id.as_str())
            .collect();
        self.shown
            .iter()
            .map(String::as_str)
            .filter(|id| !drawn.contains(id))
            .sorted()
            .collect()
    }

    #[must_use]
    pub fn repaints(&self) -> usize {
        self.repaints
    }
}

impl MapSurface for InMemoryMap {
    fn marker_ids(&self) -> Vec<String> {
        self.overlays
            .iter()
            .filter_map(Overlay::as_marker)
            .map(|marker| marker.id.clone())
            .collect()
    }

    fn is_info_window_shown(&self, id: &str) -> bool {
        self.shown.contains(id)
    }

    fn show_info_window(&mut self, id: &str) {
        self.shown.insert(id.to_string());
    }

    fn close_info_window(&mut self, id: &str) {
        self.shown.remove(id);
    }

    fn clear_overlays(&mut self) {
        self.overlays.clear();
    }

    fn add_overlay(&mut self, overlay: Overlay) {
        self.overlays.push(overlay);
    }

    fn invalidate(&mut self) {
        self.repaints += 1;
    }
}

impl fmt::Display for InMemoryMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layers = self
            .overlays
            .iter()
            .map(|overlay| match overlay {
                Overlay::Marker(marker) if self.shown.contains(&marker.id) => {
                    format!("{}*", marker.id)
                }
                other => other.to_string(),
            })
            .join(", ");
        write!(f, "[{layers}]")
    }
}
