//! Fetch the board from a server, narrow it with a search and print the markers.
//!
//! ```sh
//! PINBOARD_SERVER_URL=http://localhost:8989 cargo run --example browse_places -- coffee
//! ```

use anyhow::Context;
use pinboard::{
    InMemoryMap, MapConfig, MapSession, Overlay,
    client::{HttpPlaceClient, PlaceApi},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pinboard::init_logging(tracing::Level::INFO)?;

    let query = std::env::args().nth(1).unwrap_or_default();
    let client = HttpPlaceClient::from_env().context("Failed to configure places client")?;

    let mut session = MapSession::new(InMemoryMap::new(), MapConfig::default());
    if !session.places_loaded(client.get_places().await) {
        anyhow::bail!("Could not fetch places from {}", client.config().server_url);
    }

    session.query_changed(query.as_str());
    println!(
        "Showing markers for {:?} ({} places on the board):",
        query,
        session.all_places().len()
    );
    for overlay in session.surface().overlays() {
        if let Overlay::Marker(marker) = overlay {
            println!("  {} at {} - {}", marker.id, marker.position, marker.title);
        }
    }

    Ok(())
}
