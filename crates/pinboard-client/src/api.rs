use std::future::Future;

use crate::{Place, Result};

/// The narrow interface the map core needs from the places server.
///
/// Results are delivered as a plain [`Result`]; the caller pattern matches on it
/// instead of reaching into a container that may rethrow.
pub trait PlaceApi {
    /// Fetch every place currently on the board.
    fn get_places(&self) -> impl Future<Output = Result<Vec<Place>>> + Send;

    /// Submit a new favourite place. The response body is not inspected.
    fn post_place(&self, place: &Place) -> impl Future<Output = Result<()>> + Send;
}
