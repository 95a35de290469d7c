use reqwest::Client;
use tracing::{info, instrument, warn};

use crate::{ClientConfig, Place, PlaceApi, Result, parse_places};

const PLACES_PATH: &str = "places/";
const FAVORITE_PLACE_PATH: &str = "favoriteplace/";

/// [`PlaceApi`] over HTTP with JSON bodies.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpPlaceClient {
    client: Client,
    config: ClientConfig,
}

impl HttpPlaceClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Create a client from `PINBOARD_SERVER_URL` / `PINBOARD_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch the place listing on a private runtime.
    ///
    /// Must not be called from inside an async context.
    #[instrument(name = "Fetch places (blocking)", skip_all, level = "info")]
    pub fn get_places_blocking(&self) -> Result<Vec<Place>> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        rt.block_on(self.get_places())
    }

    /// Submit `place` without waiting for the server.
    ///
    /// The outcome is only logged. Must be called from within a Tokio runtime.
    pub fn submit_detached(&self, place: Place) -> tokio::task::JoinHandle<()> {
        let this = self.clone();
        tokio::spawn(async move {
            match this.post_place(&place).await {
                Ok(()) => info!(id = %place.id, "Place submitted"),
                Err(e) => warn!(id = %place.id, error = %e, "Place submission failed"),
            }
        })
    }
}

impl PlaceApi for HttpPlaceClient {
    #[instrument(name = "Fetch places", skip_all, level = "info")]
    async fn get_places(&self) -> Result<Vec<Place>> {
        let url = self.config.endpoint(PLACES_PATH);
        info!(url = %url, "Requesting place listing");
        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let places = parse_places(&body)?;
        info!(count = places.len(), "Place listing received");
        Ok(places)
    }

    #[instrument(name = "Post place", skip_all, fields(id = %place.id), level = "info")]
    async fn post_place(&self, place: &Place) -> Result<()> {
        let url = self.config.endpoint(FAVORITE_PLACE_PATH);
        self.client
            .post(&url)
            .json(place)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
