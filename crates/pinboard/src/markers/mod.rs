//! Map marker reconciliation.
//!
//! Each redraw rebuilds the whole overlay stack from a place list. The only state carried
//! between redraws is which place has its detail popup open ([`ReconcilerState`]).
//!
//! [`reconcile`] is the pure planning step; [`MarkerReconciler`] applies plans and clicks
//! to a [`MapSurface`].
//!
//! ```rust
//! use pinboard::{InMemoryMap, MarkerReconciler, Place};
//!
//! let places = vec![
//!     Place::new("a", "Geoff", 40.11, -88.23, "zz", "Nice quiet spot."),
//!     Place::new("b", "Geoff", 40.10, -88.22, "zz", "Loud bar."),
//! ];
//!
//! let mut reconciler = MarkerReconciler::new(InMemoryMap::new());
//! reconciler.redraw(&places);
//! reconciler.click("a");
//!
//! // "a" is gone from the next list, so its popup is forgotten.
//! let state = reconciler.redraw(&places[1..]);
//! assert_eq!(state.open_place_id(), None);
//! ```

mod overlay;
mod reconcile;
mod surface;

pub use overlay::{Anchor, MarkerOptions, Overlay};
pub use reconcile::{ClickOutcome, ReconcilerState, Reconciliation, reconcile, toggle_marker};
pub use surface::{InMemoryMap, MapSurface, MarkerReconciler};
