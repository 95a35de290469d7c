use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::Result;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns true if both coordinates fall inside the WGS84 ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

const fn unset_coordinate() -> f64 {
    Place::UNSET_COORDINATE
}

/// A favourite place submitted to the shared board.
///
/// Places are identified by [`Place::id`]: two places with the same id are the same
/// marker on the map even when their other fields differ.
///
/// The JSON shape is fixed by the server. `name` carries the owner's display name and
/// `npg` carries the category code; coordinates that are missing from the payload
/// deserialize to [`Place::UNSET_COORDINATE`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Identifier of the place, unique within one listing
    #[serde(default)]
    pub id: String,
    /// Name of the person who submitted this place
    #[serde(rename = "name", default)]
    pub owner_name: String,
    /// Latitude in decimal degrees, or [`Place::UNSET_COORDINATE`]
    #[serde(default = "unset_coordinate")]
    pub latitude: f64,
    /// Longitude in decimal degrees, or [`Place::UNSET_COORDINATE`]
    #[serde(default = "unset_coordinate")]
    pub longitude: f64,
    /// Free text description, also used as the marker title
    #[serde(default)]
    pub description: String,
    /// Short category tag
    #[serde(rename = "npg", default)]
    pub category_code: String,
}

impl Place {
    /// Sentinel for a coordinate that was never set. Must never reach the map.
    pub const UNSET_COORDINATE: f64 = 99999.0;

    #[must_use]
    pub fn new(
        id: impl Into<String>,
        owner_name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        category_code: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            owner_name: owner_name.into(),
            latitude,
            longitude,
            description: description.into(),
            category_code: category_code.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn category_code(&self) -> &str {
        &self.category_code
    }

    /// Returns the position of the place if both coordinates are set and in range.
    #[must_use]
    pub fn position(&self) -> Option<GeoPoint> {
        if self.latitude == Self::UNSET_COORDINATE || self.longitude == Self::UNSET_COORDINATE {
            return None;
        }
        let point = GeoPoint::new(self.latitude, self.longitude);
        point.is_valid().then_some(point)
    }

    /// Returns true if the place has an id and a usable position.
    #[must_use]
    pub fn is_mappable(&self) -> bool {
        !self.id.is_empty() && self.position().is_some()
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Place {{ id: \"{}\", description: \"{}\" }}",
            self.id, self.description
        )
    }
}

/// Drops places that cannot be drawn: empty ids, unset or out-of-range coordinates.
///
/// This is the producer-side filter; the marker reconciler never validates places itself.
pub fn retain_mappable(places: Vec<Place>) -> Vec<Place> {
    let total = places.len();
    let kept: Vec<Place> = places
        .into_iter()
        .filter(|place| {
            let mappable = place.is_mappable();
            if !mappable {
                warn!(
                    id = %place.id,
                    latitude = place.latitude,
                    longitude = place.longitude,
                    "Dropping place that cannot be mapped"
                );
            }
            mappable
        })
        .collect();
    if kept.len() != total {
        warn!(dropped = total - kept.len(), total, "Filtered unmappable places");
    }
    kept
}

/// Decode a server place listing.
pub fn parse_places(json: &str) -> Result<Vec<Place>> {
    Ok(serde_json::from_str(json)?)
}
