//! Search and marker reconciliation without a server
//!
//! This example demonstrates:
//! - Whole-word search and the empty-result fallback
//! - Keeping a popup open across redraws
//! - Starting an add-place draft from a long press

use pinboard::{
    AddPlaceConfig, GeoPoint, Hotspot, HotspotTable, InMemoryMap, MapConfig, MapSession, Place,
    handlers::{SingleTap, on_single_tap},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let places = vec![
        Place::new("a", "Geoff", 40.1098, -88.2283, "zz", "Nice quiet spot."),
        Place::new("b", "Ana", 40.1125, -88.2282, "zz", "Best coffee on campus!"),
        Place::new("c", "Raj", 40.1020, -88.2270, "zz", "Quiet classroom, room 1404"),
    ];

    let mut session = MapSession::new(InMemoryMap::new(), MapConfig::default());
    let config = session.config();
    if let Some(url) = config
        .tile_source
        .tile_url(config.center, config.default_zoom as u8)
    {
        println!("Centre tile:       {url}");
    }
    session.places_loaded(Ok(places));
    println!("All places:        {}", session.surface());

    session.marker_clicked("c");
    println!("After click on c:  {}", session.surface());

    session.query_changed("quiet");
    println!("Query \"quiet\":     {}", session.surface());

    session.query_changed("class");
    println!("Query \"class\":     {} (no whole-word match)", session.surface());

    session.query_changed("coffee");
    println!("Query \"coffee\":    {}", session.surface());

    let hotspots = HotspotTable::new("campus.png")
        .with(Hotspot::new(40.1124, 40.1125, -88.2283, -88.2282, "coffee.png"));
    let tap = SingleTap {
        point: GeoPoint::new(40.11245, -88.22825),
    };
    println!("Tap resource:      {}", on_single_tap(tap, &hotspots));

    let draft = session.long_pressed(GeoPoint::new(40.1100, -88.2300))?;
    let place = draft.into_place("Sunny bench", &AddPlaceConfig::new("client-1"));
    println!("New place draft:   {place}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offline_board_example() {
        let _ = pinboard::init_logging(tracing::Level::WARN);
        assert!(main().is_ok(), "Offline example should run successfully");
    }
}
