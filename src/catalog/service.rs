//! HTTP client for the published content catalog.
//!
//! Two stateless operations against a static store: list the catalog index
//! and fetch one entry body. Each call is a single round-trip with no retry
//! and no caching. A missing catalog is an empty catalog; a missing body
//! file is an error.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tokio::time;
use tracing::debug;

use super::entry::ContentEntry;

/// Default directory under the origin that holds the catalog and body files
pub const DEFAULT_CONTENT_ROOT: &str = "blog-entries";

/// Default file name of the catalog index under the content root
pub const DEFAULT_CATALOG_INDEX: &str = "catalog-index.json";

/// Errors produced by catalog operations
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Transport failure or non-success response status
    #[error("retrieval of {url} failed")]
    Retrieval {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Catalog payload was present but is not a list of entry records
    #[error("catalog at {url} could not be decoded")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The caller's deadline elapsed before the round-trip completed
    #[error("retrieval of {url} cancelled before completion")]
    Cancelled { url: String },
}

impl ServiceError {
    /// Response status when the store answered, `None` for transport failures
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ServiceError::Retrieval { source, .. } => source.status(),
            _ => None,
        }
    }

    /// True when the store answered 404 for the requested path
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// URL of the retrieval that failed
    pub fn url(&self) -> &str {
        match self {
            ServiceError::Retrieval { url, .. }
            | ServiceError::Decode { url, .. }
            | ServiceError::Cancelled { url } => url,
        }
    }
}

/// Client for a statically hosted content catalog
///
/// Holds only immutable construction-time state, so one instance can serve
/// any number of concurrent callers. Dropping an in-flight future aborts the
/// underlying request.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
    content_root: String,
    catalog_index: String,
}

impl CatalogClient {
    /// Create a client for the given origin with a default transport
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client with an explicitly constructed transport
    ///
    /// Timeouts, proxies and TLS policy belong to the caller-built `Client`.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            content_root: DEFAULT_CONTENT_ROOT.to_string(),
            catalog_index: DEFAULT_CATALOG_INDEX.to_string(),
        }
    }

    /// Override the directory under the origin that holds all content files
    pub fn with_content_root(mut self, root: impl Into<String>) -> Self {
        self.content_root = root.into();
        self
    }

    /// Override the file name of the catalog index
    pub fn with_catalog_index(mut self, index: impl Into<String>) -> Self {
        self.catalog_index = index.into();
        self
    }

    /// Build the URL of a file under the content root
    fn content_url(&self, file: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.content_root.trim_matches('/'),
            file.trim_start_matches('/')
        )
    }

    /// Fetch the catalog index
    ///
    /// Returns the entries in store order, without deduplication. A missing
    /// index or a literal `null` payload is an empty catalog, not an error:
    /// an unpublished catalog is an expected state for a new deployment.
    pub async fn list_entries(&self) -> Result<Vec<ContentEntry>, ServiceError> {
        self.list_entries_within(None).await
    }

    /// [`list_entries`](Self::list_entries) bounded by a caller-supplied deadline
    pub async fn list_entries_within(
        &self,
        deadline: Option<Duration>,
    ) -> Result<Vec<ContentEntry>, ServiceError> {
        let url = self.content_url(&self.catalog_index);

        let payload = match self.fetch_text(&url, deadline).await {
            Ok(payload) => payload,
            Err(err) if err.is_not_found() => {
                debug!(%url, "catalog not published, treating as empty");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err),
        };

        // `null` means no catalog yet; anything else must be an entry list.
        let entries: Option<Vec<ContentEntry>> = serde_json::from_str(&payload)
            .map_err(|source| ServiceError::Decode { url, source })?;

        Ok(entries.unwrap_or_default())
    }

    /// Fetch the raw body of one entry
    ///
    /// `file_reference` is the `file_name` of a previously listed entry. The
    /// text is returned verbatim; interpreting it (e.g. as Markdown) is the
    /// caller's concern. An unknown reference fails with a not-found
    /// retrieval error.
    pub async fn get_body(&self, file_reference: &str) -> Result<String, ServiceError> {
        self.get_body_within(file_reference, None).await
    }

    /// [`get_body`](Self::get_body) bounded by a caller-supplied deadline
    pub async fn get_body_within(
        &self,
        file_reference: &str,
        deadline: Option<Duration>,
    ) -> Result<String, ServiceError> {
        let url = self.content_url(file_reference);
        self.fetch_text(&url, deadline).await
    }

    /// One GET round-trip, status-checked, body returned as text
    ///
    /// With a deadline, expiry drops the in-flight request and fails with
    /// `Cancelled`; a partial body is never returned.
    async fn fetch_text(
        &self,
        url: &str,
        deadline: Option<Duration>,
    ) -> Result<String, ServiceError> {
        debug!(%url, "fetching");

        let retrieval = |source| ServiceError::Retrieval {
            url: url.to_string(),
            source,
        };

        let round_trip = async {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(retrieval)?
                .error_for_status()
                .map_err(retrieval)?;

            response.text().await.map_err(retrieval)
        };

        match deadline {
            Some(limit) => time::timeout(limit, round_trip)
                .await
                .unwrap_or_else(|_| {
                    Err(ServiceError::Cancelled {
                        url: url.to_string(),
                    })
                }),
            None => round_trip.await,
        }
    }
}
