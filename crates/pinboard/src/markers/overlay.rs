use std::fmt;

use crate::{GeoPoint, Place};

/// Where a marker icon is pinned relative to its position, as fractions of the icon size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub horizontal: f32,
    pub vertical: f32,
}

impl Anchor {
    /// Icon centred horizontally with its bottom edge on the position.
    pub const BOTTOM_CENTER: Self = Self {
        horizontal: 0.5,
        vertical: 1.0,
    };
}

impl Default for Anchor {
    fn default() -> Self {
        Self::BOTTOM_CENTER
    }
}

/// Everything the map needs to draw one place.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerOptions {
    /// Id of the place this marker represents
    pub id: String,
    pub position: GeoPoint,
    pub anchor: Anchor,
    /// Popup title, the place description
    pub title: String,
    /// Whether the detail popup should be shown after drawing
    pub info_window_open: bool,
}

impl MarkerOptions {
    #[must_use]
    pub fn from_place(place: &Place, info_window_open: bool) -> Self {
        Self {
            id: place.id.clone(),
            position: GeoPoint::new(place.latitude, place.longitude),
            anchor: Anchor::BOTTOM_CENTER,
            title: place.description.clone(),
            info_window_open,
        }
    }
}

/// One layer of the map's overlay stack.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    /// A place marker
    Marker(MarkerOptions),
    /// Catch-all layer receiving taps and long presses that miss every marker.
    /// Always drawn last.
    MapEvents,
}

impl Overlay {
    #[must_use]
    pub fn as_marker(&self) -> Option<&MarkerOptions> {
        match self {
            Self::Marker(marker) => Some(marker),
            Self::MapEvents => None,
        }
    }
}

impl fmt::Display for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Marker(marker) if marker.info_window_open => write!(f, "{}*", marker.id),
            Self::Marker(marker) => write!(f, "{}", marker.id),
            Self::MapEvents => write!(f, "<events>"),
        }
    }
}
