//! Pinboard - favourite places on a shared map
//!
//! Pinboard holds the logic behind a map of user-submitted places: whole-word search over
//! place descriptions, and reconciliation of map markers so that the open detail popup
//! survives redraws.
//!
//! # Quick Start
//!
//! ```rust
//! use pinboard::{InMemoryMap, MarkerReconciler, Place, search};
//!
//! let places = vec![
//!     Place::new("a", "Geoff", 40.11, -88.23, "zz", "Nice quiet spot."),
//!     Place::new("b", "Geoff", 40.10, -88.22, "zz", "My favourite classroom"),
//! ];
//!
//! // Whole words only: "class" does not match "classroom"
//! assert_eq!(search(&places, "quiet").len(), 1);
//! assert!(search(&places, "class").is_empty());
//!
//! // Draw markers and open a popup
//! let mut reconciler = MarkerReconciler::new(InMemoryMap::new());
//! reconciler.redraw(&places);
//! reconciler.click("b");
//!
//! // The popup stays open while its place is still listed
//! let state = reconciler.redraw(&search(&places, "classroom"));
//! assert_eq!(state.open_place_id(), Some("b"));
//! ```
//!
//! # Collaborators
//!
//! Rendering and transport live outside this crate. The map widget is reached through
//! [`MapSurface`]; the places server through [`client::PlaceApi`], implemented over HTTP by
//! `pinboard-client` (re-exported as [`client`]).
use once_cell::sync::OnceCell;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

mod add_place;
pub mod config;
pub mod error;
pub mod handlers;
pub mod hotspots;
pub mod markers;
pub mod search;

pub use add_place::AddPlaceDraft;
pub use config::{AddPlaceConfig, MapBounds, MapConfig, MapConfigBuilder, TileSource};
pub use handlers::MapSession;
pub use hotspots::{Hotspot, HotspotTable};
pub use markers::{
    Anchor, ClickOutcome, InMemoryMap, MapSurface, MarkerReconciler, MarkerOptions, Overlay,
    ReconcilerState, Reconciliation, reconcile,
};
pub use pinboard_client as client;
pub use pinboard_client::{GeoPoint, Place};
pub use search::{search, try_search};

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Initialize logging for Pinboard.
///
/// Installs a `tracing` fmt subscriber. `RUST_LOG` takes precedence over `level`.
/// Later calls are no-ops.
///
/// # Examples
///
/// ```rust
/// use pinboard::init_logging;
/// use tracing::Level;
///
/// init_logging(Level::INFO)?;
/// # Ok::<(), pinboard::error::PinboardError>(())
/// ```
pub fn init_logging(level: impl Into<LevelFilter>) -> Result<&'static (), error::PinboardError> {
    LOGGER_INIT.get_or_try_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level.into().to_string()))?
            .add_directive("reqwest=warn".parse()?)
            .add_directive("hyper_util=warn".parse()?);

        tracing_subscriber::fmt::fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
        Ok(())
    })
}
