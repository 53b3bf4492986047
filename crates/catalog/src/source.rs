//! Venue sources: where a catalog comes from.
//!
//! The [`VenueSource`] trait is the seam to the external booking API. The
//! store only ever sees a finished `Vec<VenueRecord>` or an error.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::VenueRecord;
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, instrument};

/// Something that can produce the full venue list in one call.
pub trait VenueSource: Send + Sync {
    /// Short description for logs, e.g. a path or URL
    fn describe(&self) -> String;

    /// Fetch every venue, in the order the backend returns them.
    fn fetch_venues(&self) -> impl Future<Output = Result<Vec<VenueRecord>>> + Send;
}

// =============================================================================
// JSON file
// =============================================================================

/// Reads a venue payload from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl VenueSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch_venues(&self) -> Result<Vec<VenueRecord>> {
        let payload = tokio::fs::read_to_string(&self.path).await?;
        debug!("Read {} bytes of venue data", payload.len());
        parser::parse_venues(&payload)
    }
}

// =============================================================================
// Booking API over HTTP
// =============================================================================

/// Fetches venues from the booking API with `GET {base_url}/venues`.
#[derive(Debug, Clone)]
pub struct HttpVenueSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpVenueSource {
    /// Default request timeout for the venue list call
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a source for the given API base URL (e.g. "http://localhost:8080/api").
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Self::DEFAULT_TIMEOUT)
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a source reusing an existing client.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Full URL of the venue list endpoint
    pub fn venues_url(&self) -> String {
        format!("{}/venues", self.base_url.trim_end_matches('/'))
    }
}

impl VenueSource for HttpVenueSource {
    fn describe(&self) -> String {
        self.venues_url()
    }

    #[instrument(skip(self), fields(url = %self.venues_url()))]
    async fn fetch_venues(&self) -> Result<Vec<VenueRecord>> {
        let response = self.client.get(self.venues_url()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Unavailable {
                reason: format!("booking API answered {status}"),
            });
        }

        let payload = response.text().await?;
        debug!("Received {} bytes of venue data", payload.len());
        parser::parse_venues(&payload)
    }
}

// =============================================================================
// In-memory
// =============================================================================

/// Serves a fixed venue list. Used by tests and demos.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    venues: Vec<VenueRecord>,
}

impl StaticSource {
    pub fn new(venues: Vec<VenueRecord>) -> Self {
        Self { venues }
    }
}

impl VenueSource for StaticSource {
    fn describe(&self) -> String {
        format!("static ({} venues)", self.venues.len())
    }

    async fn fetch_venues(&self) -> Result<Vec<VenueRecord>> {
        Ok(self.venues.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venues_url_trims_trailing_slash() {
        let source = HttpVenueSource::with_client(reqwest::Client::new(), "http://api.test/v1/");
        assert_eq!(source.venues_url(), "http://api.test/v1/venues");

        let source = HttpVenueSource::with_client(reqwest::Client::new(), "http://api.test");
        assert_eq!(source.venues_url(), "http://api.test/venues");
    }

    #[tokio::test]
    async fn test_static_source_returns_venues_in_order() {
        let source = StaticSource::new(vec![VenueRecord::new("b"), VenueRecord::new("a")]);
        let venues = source.fetch_venues().await.unwrap();
        let ids: Vec<&str> = venues.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = JsonFileSource::new("/definitely/not/here/venues.json");
        let err = source.fetch_venues().await.unwrap_err();
        assert!(matches!(err, CatalogError::IoError(_)));
    }
}
