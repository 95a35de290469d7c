//! Typed UI event handlers.
//!
//! Each handler is an independent function over explicit event data; [`MapSession`] is one
//! way of composing them for a single map view.

use std::borrow::Cow;

use pinboard_client::{ClientError, retain_mappable};
use tracing::{debug, error, info};

use crate::{
    AddPlaceDraft, GeoPoint, Place,
    config::MapConfig,
    error::PinboardError,
    hotspots::HotspotTable,
    markers::{ClickOutcome, MapSurface, MarkerReconciler, ReconcilerState, toggle_marker},
    search::search,
};

/// The search box text changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTextChanged {
    pub text: String,
}

/// A marker was tapped. `info_window_shown` is its popup status at the time of the tap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerClicked {
    pub id: String,
    pub info_window_shown: bool,
}

/// A tap that hit no marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SingleTap {
    pub point: GeoPoint,
}

/// A long press that hit no marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongPress {
    pub point: GeoPoint,
}

/// Accept the outcome of a place listing fetch.
///
/// Unmappable places are dropped. A failed fetch is logged and yields `None`; the caller
/// keeps whatever it was showing.
pub fn on_places_loaded(result: Result<Vec<Place>, ClientError>) -> Option<Vec<Place>> {
    match result {
        Ok(places) => {
            info!(count = places.len(), "List of places is available");
            Some(retain_mappable(places))
        }
        Err(e) => {
            error!(error = %e, "Fetching places failed");
            None
        }
    }
}

/// Places to show for the current search text.
///
/// A search that matches nothing shows every place instead of an empty map.
pub fn on_query_text_change<'a>(all: &'a [Place], event: &QueryTextChanged) -> Cow<'a, [Place]> {
    debug!(text = %event.text, "Query text changed");
    let filtered = search(all, &event.text);
    if filtered.is_empty() {
        Cow::Borrowed(all)
    } else {
        filtered
    }
}

/// Next reconciler state after a marker tap.
#[must_use]
pub fn on_marker_click(event: &MarkerClicked) -> (ReconcilerState, ClickOutcome) {
    toggle_marker(&event.id, event.info_window_shown)
}

/// Begin adding a place where the map was long-pressed.
pub fn on_long_press(event: LongPress) -> Result<AddPlaceDraft, PinboardError> {
    debug!(point = %event.point, "Long press");
    AddPlaceDraft::new(event.point)
}

/// Resource to display for a single tap.
#[must_use]
pub fn on_single_tap(event: SingleTap, hotspots: &HotspotTable) -> &str {
    hotspots.lookup(event.point)
}

/// The state behind one map view: the full place listing and the drawn markers.
#[derive(Debug)]
pub struct MapSession<S: MapSurface> {
    config: MapConfig,
    all_places: Vec<Place>,
    reconciler: MarkerReconciler<S>,
}

impl<S: MapSurface> MapSession<S> {
    pub fn new(surface: S, config: MapConfig) -> Self {
        Self {
            config,
            all_places: Vec::new(),
            reconciler: MarkerReconciler::new(surface),
        }
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Every place from the last successful fetch.
    pub fn all_places(&self) -> &[Place] {
        &self.all_places
    }

    pub fn reconciler(&self) -> &MarkerReconciler<S> {
        &self.reconciler
    }

    pub fn surface(&self) -> &S {
        self.reconciler.surface()
    }

    /// Store a fresh listing and show all of it. Returns false if the fetch failed.
    pub fn places_loaded(&mut self, result: Result<Vec<Place>, ClientError>) -> bool {
        let Some(places) = on_places_loaded(result) else {
            return false;
        };
        self.all_places = places;
        self.reconciler.redraw(&self.all_places);
        true
    }

    /// Narrow the markers to the search text and redraw.
    pub fn query_changed(&mut self, text: impl Into<String>) -> &ReconcilerState {
        let event = QueryTextChanged { text: text.into() };
        let shown = on_query_text_change(&self.all_places, &event);
        self.reconciler.redraw(&shown)
    }

    pub fn marker_clicked(&mut self, id: &str) -> Option<ClickOutcome> {
        self.reconciler.click(id)
    }

    /// Begin adding a place at `point`, clamped into the scrollable area.
    pub fn long_pressed(&self, point: GeoPoint) -> Result<AddPlaceDraft, PinboardError> {
        on_long_press(LongPress {
            point: self.config.bounds.clamp(point),
        })
    }
}
