//! Catalog entry records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One published item in the catalog
///
/// Entries are built fresh on every catalog fetch and are immutable after
/// construction. The order of entries is whatever the store published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentEntry {
    /// Display title
    pub name: String,

    /// Free-text summary, may be empty
    #[serde(default)]
    pub description: String,

    /// Publication timestamp as published by the store.
    /// Only meaningful as an ordering key; the client never sorts by it.
    pub publish_date: DateTime<Utc>,

    /// Relative path of the body file under the content root.
    /// Unique within a catalog snapshot; only meaningful as the lookup key
    /// for a body fetch.
    pub file_name: String,
}
