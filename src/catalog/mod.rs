//! Catalog access for statically hosted content.
//!
//! The store is a plain HTTP origin serving a JSON index and Markdown body
//! files, published alongside the site itself:
//!
//! ```text
//! <origin>/
//! └── blog-entries/
//!     ├── catalog-index.json    # ordered array of entry records
//!     ├── hello.md              # body files, addressed by fileName
//!     └── ...
//! ```
//!
//! Every operation is one stateless round-trip; there is no caching, so
//! repeated calls observe whatever the store currently publishes.

pub mod entry;
pub mod service;

pub use entry::ContentEntry;
pub use service::{CatalogClient, ServiceError, DEFAULT_CATALOG_INDEX, DEFAULT_CONTENT_ROOT};
