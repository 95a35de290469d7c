//! Place model and network client for the Pinboard favourite-places server.
//!
//! The map core treats this crate as an external collaborator: it fetches the current
//! listing of [`Place`]s and submits new ones, and everything it hands back is an ordinary
//! [`Result`].
//!
//! ```rust,no_run
//! use pinboard_client::{HttpPlaceClient, retain_mappable};
//!
//! let client = HttpPlaceClient::from_env()?;
//! let places = retain_mappable(client.get_places_blocking()?);
//! println!("{} places on the board", places.len());
//! # Ok::<(), pinboard_client::ClientError>(())
//! ```

mod api;
mod config;
mod error;
#[cfg(feature = "http")]
mod http;
mod place;

pub use api::PlaceApi;
pub use config::{ClientConfig, SERVER_URL_DEFAULT, TIMEOUT_DEFAULT};
pub use error::{ClientError, Result};
#[cfg(feature = "http")]
pub use http::HttpPlaceClient;
pub use place::{GeoPoint, Place, parse_places, retain_mappable};
