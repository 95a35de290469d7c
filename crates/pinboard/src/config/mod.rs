use crate::{GeoPoint, error::PinboardError};

/// Geographic box the map may scroll within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub north: f64,
    pub south: f64,
    pub west: f64,
    pub east: f64,
}

impl MapBounds {
    /// Returns true if `point` lies inside the box, edges included.
    #[must_use]
    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.south..=self.north).contains(&point.latitude)
            && (self.west..=self.east).contains(&point.longitude)
    }

    /// Move `point` onto the nearest position inside the box.
    ///
    /// Never panics: with inverted bounds the result sits on the north/east edge.
    #[must_use]
    pub fn clamp(&self, point: GeoPoint) -> GeoPoint {
        GeoPoint::new(
            point.latitude.max(self.south).min(self.north),
            point.longitude.max(self.west).min(self.east),
        )
    }
}

/// An XYZ tile server.
#[derive(Debug, Clone, PartialEq)]
pub struct TileSource {
    pub name: String,
    pub min_zoom: u8,
    pub max_zoom: u8,
    /// Tile edge in pixels
    pub tile_size: u32,
    /// File extension including the dot, e.g. ".png"
    pub extension: String,
    pub base_urls: Vec<String>,
}

impl Default for TileSource {
    fn default() -> Self {
        Self {
            name: "CS124".to_string(),
            min_zoom: 12,
            max_zoom: 18,
            tile_size: 256,
            extension: ".png".to_string(),
            base_urls: vec!["https://tiles.cs124.org/tiles/".to_string()],
        }
    }
}

impl TileSource {
    /// URL of the Web Mercator tile covering `point` at `zoom`, on the first base URL.
    ///
    /// `zoom` is limited to the source's zoom range.
    #[must_use]
    pub fn tile_url(&self, point: GeoPoint, zoom: u8) -> Option<String> {
        let base = self.base_urls.first()?;
        let zoom = zoom.max(self.min_zoom).min(self.max_zoom);
        let n = 2_f64.powi(i32::from(zoom));
        let x = ((point.longitude + 180.0) / 360.0 * n).floor() as u32;
        let y = ((1.0 - point.latitude.to_radians().tan().asinh() / std::f64::consts::PI) / 2.0
            * n)
            .floor() as u32;
        Some(format!("{base}{zoom}/{x}/{y}{}", self.extension))
    }
}

/// Viewport configuration for the map view.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub bounds: MapBounds,
    /// The map cannot zoom out further than this
    pub min_zoom: f64,
    pub default_zoom: f64,
    pub center: GeoPoint,
    pub tile_source: TileSource,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            bounds: MapBounds {
                north: 40.1741,
                south: 40.0247,
                west: -88.3331,
                east: -88.1433,
            },
            min_zoom: 12.0,
            default_zoom: 17.0,
            center: GeoPoint::new(40.109_866_821_675_34, -88.228_319_289_816_61),
            tile_source: TileSource::default(),
        }
    }
}

impl MapConfig {
    #[must_use]
    pub fn builder() -> MapConfigBuilder {
        MapConfigBuilder::new()
    }
}

/// Builder for [`MapConfig`] with validation on [`MapConfigBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct MapConfigBuilder {
    config: MapConfig,
}

impl MapConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: MapConfig::default(),
        }
    }

    /// Limit scrolling to the given box
    pub fn bounds(mut self, north: f64, south: f64, west: f64, east: f64) -> Self {
        self.config.bounds = MapBounds {
            north,
            south,
            west,
            east,
        };
        self
    }

    pub fn min_zoom(mut self, zoom: f64) -> Self {
        self.config.min_zoom = zoom;
        self
    }

    pub fn default_zoom(mut self, zoom: f64) -> Self {
        self.config.default_zoom = zoom;
        self
    }

    /// Initial map centre
    pub fn center(mut self, latitude: f64, longitude: f64) -> Self {
        self.config.center = GeoPoint::new(latitude, longitude);
        self
    }

    pub fn tile_source(mut self, tile_source: TileSource) -> Self {
        self.config.tile_source = tile_source;
        self
    }

    /// Build the configuration, rejecting inverted bounds, an inverted zoom range or a
    /// centre outside the bounds.
    pub fn build(self) -> Result<MapConfig, PinboardError> {
        let config = self.config;
        let bounds = config.bounds;

        if bounds.south >= bounds.north || bounds.west >= bounds.east {
            return Err(PinboardError::ConfigError(format!(
                "Map bounds are inverted: {bounds:?}"
            )));
        }
        if !GeoPoint::new(bounds.north, bounds.east).is_valid()
            || !GeoPoint::new(bounds.south, bounds.west).is_valid()
        {
            return Err(PinboardError::ConfigError(format!(
                "Map bounds exceed valid coordinates: {bounds:?}"
            )));
        }
        let tiles = &config.tile_source;
        if tiles.min_zoom > tiles.max_zoom {
            return Err(PinboardError::ConfigError(format!(
                "Tile zoom range is inverted: {}..{}",
                tiles.min_zoom, tiles.max_zoom
            )));
        }
        if config.min_zoom > config.default_zoom {
            return Err(PinboardError::ConfigError(format!(
                "Default zoom {} is below minimum zoom {}",
                config.default_zoom, config.min_zoom
            )));
        }
        if !bounds.contains(config.center) {
            return Err(PinboardError::ConfigError(format!(
                "Map centre {} lies outside the bounds",
                config.center
            )));
        }
        Ok(config)
    }
}

/// Fixed values stamped on places created from this client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPlaceConfig {
    /// Id of this client; new places are submitted under it
    pub client_id: String,
    /// Owner name sent with new places
    pub owner_name: String,
    /// Category code sent with new places
    pub category_code: String,
}

pub const OWNER_NAME_DEFAULT: &str = "Shakesphere";
pub const CATEGORY_CODE_DEFAULT: &str = "zz";

impl AddPlaceConfig {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            owner_name: OWNER_NAME_DEFAULT.to_string(),
            category_code: CATEGORY_CODE_DEFAULT.to_string(),
        }
    }

    /// Read the client id from `PINBOARD_CLIENT_ID`.
    pub fn from_env() -> Result<Self, PinboardError> {
        let client_id = std::env::var("PINBOARD_CLIENT_ID").map_err(|_| {
            PinboardError::ConfigError("PINBOARD_CLIENT_ID is not set".to_string())
        })?;
        if client_id.trim().is_empty() {
            return Err(PinboardError::ConfigError(
                "PINBOARD_CLIENT_ID is empty".to_string(),
            ));
        }
        Ok(Self::new(client_id.trim()))
    }

    pub fn owner_name(mut self, owner_name: impl Into<String>) -> Self {
        self.owner_name = owner_name.into();
        self
    }

    pub fn category_code(mut self, category_code: impl Into<String>) -> Self {
        self.category_code = category_code.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_map_config() {
        let config = MapConfig::default();
        assert_eq!(config.min_zoom, 12.0);
        assert_eq!(config.default_zoom, 17.0);
        assert!(config.bounds.contains(config.center));
        assert_eq!(config.tile_source.name, "CS124");
    }

    #[test]
    fn test_default_config_passes_validation() {
        let built = MapConfigBuilder::new().build().unwrap();
        assert_eq!(built, MapConfig::default());
    }

    #[test]
    fn test_builder_chaining() {
        let config = MapConfig::builder()
            .bounds(41.0, 40.0, -89.0, -88.0)
            .center(40.5, -88.5)
            .min_zoom(10.0)
            .default_zoom(14.0)
            .build()
            .unwrap();

        assert_eq!(config.bounds.north, 41.0);
        assert_eq!(config.center, GeoPoint::new(40.5, -88.5));
        assert_eq!(config.min_zoom, 10.0);
        assert_eq!(config.default_zoom, 14.0);
    }

    #[test]
    fn test_builder_rejects_inverted_bounds() {
        let result = MapConfig::builder()
            .bounds(40.0, 41.0, -89.0, -88.0)
            .build();
        assert!(matches!(result, Err(PinboardError::ConfigError(_))));

        let result = MapConfig::builder()
            .bounds(41.0, 40.0, -88.0, -89.0)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_rejects_centre_outside_bounds() {
        let result = MapConfig::builder().center(0.0, 0.0).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_rejects_default_zoom_below_minimum() {
        let result = MapConfig::builder().min_zoom(15.0).default_zoom(12.0).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_bounds_clamp() {
        let bounds = MapConfig::default().bounds;
        let clamped = bounds.clamp(GeoPoint::new(45.0, -100.0));
        assert_eq!(clamped, GeoPoint::new(bounds.north, bounds.west));

        let inside = GeoPoint::new(40.1, -88.2);
        assert_eq!(bounds.clamp(inside), inside);
    }

    #[test]
    fn test_clamp_with_inverted_bounds_does_not_panic() {
        let bounds = MapBounds {
            north: 40.0,
            south: 41.0,
            west: -88.0,
            east: -89.0,
        };
        let clamped = bounds.clamp(GeoPoint::new(40.5, -88.5));
        assert_eq!(clamped, GeoPoint::new(40.0, -89.0));
    }

    #[test]
    fn test_tile_url() {
        let config = MapConfig::default();
        let tiles = &config.tile_source;
        assert_eq!(
            tiles.tile_url(config.center, 17).as_deref(),
            Some("https://tiles.cs124.org/tiles/17/33413/49568.png")
        );
        // Zoom is held inside the source's range
        assert_eq!(
            tiles.tile_url(config.center, 3).as_deref(),
            Some("https://tiles.cs124.org/tiles/12/1044/1549.png")
        );
        let empty = TileSource {
            base_urls: Vec::new(),
            ..TileSource::default()
        };
        assert!(empty.tile_url(config.center, 12).is_none());
    }

    #[test]
    fn test_add_place_defaults() {
        let config = AddPlaceConfig::new("client-1");
        assert_eq!(config.client_id, "client-1");
        assert_eq!(config.owner_name, "Shakesphere");
        assert_eq!(config.category_code, "zz");

        let custom = AddPlaceConfig::new("client-1")
            .owner_name("Geoff")
            .category_code("cs");
        assert_eq!(custom.owner_name, "Geoff");
        assert_eq!(custom.category_code, "cs");
    }
}
