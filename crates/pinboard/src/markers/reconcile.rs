use tracing::debug;

use super::{MarkerOptions, Overlay};
use crate::Place;

/// Which place, if any, has its detail popup open.
///
/// After every [`reconcile`] the open id is either empty or the id of a place in the list
/// that was just drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcilerState {
    open_place_id: Option<String>,
}

impl ReconcilerState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State with the popup of `id` open.
    #[must_use]
    pub fn with_open(id: impl Into<String>) -> Self {
        Self {
            open_place_id: Some(id.into()),
        }
    }

    #[must_use]
    pub fn open_place_id(&self) -> Option<&str> {
        self.open_place_id.as_deref()
    }

    #[must_use]
    pub fn is_open(&self, id: &str) -> bool {
        self.open_place_id.as_deref() == Some(id)
    }
}

/// Result of a marker click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Opened,
    Closed,
}

/// The overlay stack to draw and the state to carry into the next cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    /// Place markers in input order, followed by [`Overlay::MapEvents`]
    pub overlays: Vec<Overlay>,
    pub state: ReconcilerState,
}

impl Reconciliation {
    pub fn markers(&self) -> impl Iterator<Item = &MarkerOptions> {
        self.overlays.iter().filter_map(Overlay::as_marker)
    }

    /// The marker whose popup is open, if any.
    #[must_use]
    pub fn open_marker(&self) -> Option<&MarkerOptions> {
        self.markers().find(|marker| marker.info_window_open)
    }
}

/// Plan the overlay stack for `places`, keeping the open popup if its place is still listed.
///
/// Places are not validated; drop unmappable ones before calling
/// (see [`pinboard_client::retain_mappable`]).
#[must_use]
pub fn reconcile(places: &[Place], state: &ReconcilerState) -> Reconciliation {
    let mut overlays = Vec::with_capacity(places.len() + 1);
    let mut next_open = None;

    for place in places {
        let open = state.is_open(place.id());
        if open {
            next_open = Some(place.id.clone());
        }
        overlays.push(Overlay::Marker(MarkerOptions::from_place(place, open)));
    }

    if next_open.is_none()
        && let Some(stale) = state.open_place_id()
    {
        debug!(stale, "Open place is no longer listed, clearing");
    }

    overlays.push(Overlay::MapEvents);

    Reconciliation {
        overlays,
        state: ReconcilerState {
            open_place_id: next_open,
        },
    }
}

/// Toggle the popup of the clicked marker.
///
/// `info_window_shown` is the popup status currently visible on the map, so the next state
/// depends only on the clicked marker. Opening one marker does not close another; the next
/// redraw does that.
#[must_use]
pub fn toggle_marker(id: &str, info_window_shown: bool) -> (ReconcilerState, ClickOutcome) {
    if info_window_shown {
        (ReconcilerState::new(), ClickOutcome::Closed)
    } else {
        (ReconcilerState::with_open(id), ClickOutcome::Opened)
    }
}
