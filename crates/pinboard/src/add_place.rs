use tracing::debug;

use crate::{GeoPoint, Place, config::AddPlaceConfig, error::PinboardError};

/// A place being created at a long-pressed map position, waiting for its description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AddPlaceDraft {
    point: GeoPoint,
}

impl AddPlaceDraft {
    /// Start a draft at `point`, which must be a valid coordinate.
    pub fn new(point: GeoPoint) -> Result<Self, PinboardError> {
        if !point.is_valid() {
            return Err(PinboardError::InvalidArgument(format!(
                "Coordinates out of range: {point}"
            )));
        }
        Ok(Self { point })
    }

    /// Start a draft from coordinates passed around as text between screens.
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, PinboardError> {
        let parse = |name: &str, raw: &str| {
            raw.trim().parse::<f64>().map_err(|e| {
                PinboardError::InvalidArgument(format!("Invalid {name} {raw:?}: {e}"))
            })
        };
        Self::new(GeoPoint::new(
            parse("latitude", latitude)?,
            parse("longitude", longitude)?,
        ))
    }

    #[must_use]
    pub fn point(&self) -> GeoPoint {
        self.point
    }

    /// Finish the draft into a place owned by this client.
    #[must_use]
    pub fn into_place(self, description: impl Into<String>, config: &AddPlaceConfig) -> Place {
        let place = Place::new(
            config.client_id.clone(),
            config.owner_name.clone(),
            self.point.latitude,
            self.point.longitude,
            config.category_code.clone(),
            description,
        );
        debug!(id = %place.id, point = %self.point, "Add-place draft completed");
        place
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_textual_coordinates() {
        let draft = AddPlaceDraft::parse("40.1098", " -88.2283 ").unwrap();
        assert_eq!(draft.point(), GeoPoint::new(40.1098, -88.2283));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            AddPlaceDraft::parse("north", "-88.2"),
            Err(PinboardError::InvalidArgument(_))
        ));
        assert!(AddPlaceDraft::parse("40.1", "").is_err());
    }

    #[test]
    fn test_rejects_out_of_range_and_sentinel() {
        assert!(AddPlaceDraft::new(GeoPoint::new(95.0, 0.0)).is_err());
        assert!(AddPlaceDraft::new(GeoPoint::new(Place::UNSET_COORDINATE, 0.0)).is_err());
        assert!(AddPlaceDraft::parse("NaN", "0").is_err());
    }

    #[test]
    fn test_into_place_stamps_client_fields() {
        let config = AddPlaceConfig::new("client-42");
        let place = AddPlaceDraft::new(GeoPoint::new(40.11, -88.23))
            .unwrap()
            .into_place("Sunny bench", &config);

        assert_eq!(place.id(), "client-42");
        assert_eq!(place.owner_name(), "Shakesphere");
        assert_eq!(place.category_code(), "zz");
        assert_eq!(place.description(), "Sunny bench");
        assert_eq!(place.position(), Some(GeoPoint::new(40.11, -88.23)));
    }
}
