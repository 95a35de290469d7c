//! Single-tap lookup: small coordinate boxes mapped to a display resource.

use crate::GeoPoint;

/// An inclusive coordinate box tagged with a resource name.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotspot {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
    pub resource: String,
}

impl Hotspot {
    #[must_use]
    pub fn new(
        south: f64,
        north: f64,
        west: f64,
        east: f64,
        resource: impl Into<String>,
    ) -> Self {
        Self {
            south,
            north,
            west,
            east,
            resource: resource.into(),
        }
    }

    #[must_use]
    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.south..=self.north).contains(&point.latitude)
            && (self.west..=self.east).contains(&point.longitude)
    }
}

/// Ordered hotspots with a fallback resource. The first matching box wins.
#[derive(Debug, Clone, PartialEq)]
pub struct HotspotTable {
    entries: Vec<Hotspot>,
    fallback: String,
}

impl HotspotTable {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            fallback: fallback.into(),
        }
    }

    #[must_use]
    pub fn with(mut self, hotspot: Hotspot) -> Self {
        self.entries.push(hotspot);
        self
    }

    #[must_use]
    pub fn lookup(&self, point: GeoPoint) -> &str {
        self.entries
            .iter()
            .find(|hotspot| hotspot.contains(point))
            .map_or(self.fallback.as_str(), |hotspot| hotspot.resource.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> HotspotTable {
        HotspotTable::new("default")
            .with(Hotspot::new(40.0931, 40.0932, -88.2173, -88.2172, "first"))
            .with(Hotspot::new(40.1094, 40.1095, -88.2306, -88.2305, "second"))
            // Overlaps "second"; never reached for the shared area.
            .with(Hotspot::new(40.1094, 40.1095, -88.2306, -88.2300, "shadowed"))
    }

    #[test]
    fn test_lookup_hits_box() {
        assert_eq!(table().lookup(GeoPoint::new(40.09315, -88.21725)), "first");
    }

    #[test]
    fn test_lookup_edges_are_inclusive() {
        assert_eq!(table().lookup(GeoPoint::new(40.1094, -88.2306)), "second");
        assert_eq!(table().lookup(GeoPoint::new(40.1095, -88.2305)), "second");
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(table().lookup(GeoPoint::new(40.10945, -88.23055)), "second");
        assert_eq!(table().lookup(GeoPoint::new(40.10945, -88.2301)), "shadowed");
    }

    #[test]
    fn test_fallback() {
        assert_eq!(table().lookup(GeoPoint::new(0.0, 0.0)), "default");
        assert_eq!(HotspotTable::new("x").lookup(GeoPoint::new(1.0, 1.0)), "x");
        assert!(HotspotTable::new("x").is_empty());
        assert_eq!(table().len(), 3);
    }
}
