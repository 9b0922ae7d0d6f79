//! Manifest data structures for HLS product delivery
//!
//! This crate builds the ingest manifest an archive uses to verify and catalog a
//! delivered HLS product: one record per product, one descriptor per file.
//!
//! # Key Concepts
//!
//! - **Layout**: flat file-group shape or nested product-with-files shape
//! - **Classification table**: suffix to file role mapping, one per layout
//! - **Collection labels**: long-form collection names used for GIBS delivery
//!
//! # Example
//!
//! ```no_run
//! use hls_core_manifest::{assemble, validate_manifest, Collection, CollectionLabels, Layout, ManifestRequest};
//!
//! let request = ManifestRequest::new(
//!     Layout::Nested { gibs: true },
//!     Collection::HlsS30,
//!     "HLS.S30.2020116.099152_6",
//!     "job-1",
//! );
//! let manifest = assemble(&request, CollectionLabels::gibs(), Vec::new(), chrono::Utc::now());
//! validate_manifest(&manifest).unwrap();
//! manifest.save("manifest.json", false).unwrap();
//! ```

pub mod assemble;
pub mod classify;
pub mod error;
pub mod location;
pub mod manifest;
pub mod validate;

// Re-export main types for convenience
pub use assemble::{assemble, truncate_product, ManifestRequest};
pub use classify::{
    Classification, ClassificationTable, Collection, CollectionLabels, FileType, Layout,
};
pub use error::{Error, Result};
pub use location::StorageLocation;
pub use manifest::{FileDescriptor, FileGroup, FlatProduct, Manifest, NestedProduct, Product};
pub use validate::{validate_manifest, validate_value};

/// Manifest schema version written to every manifest
pub const MANIFEST_VERSION: &str = "1.4";

/// Label for the digest algorithm used on every file
pub const CHECKSUM_TYPE: &str = "SHA512";

/// `product.dataVersion` in the nested layout
pub const NESTED_PRODUCT_DATA_VERSION: &str = "2.0";

/// Per-file `dataVersion` in the flat layout
pub const FLAT_FILE_DATA_VERSION: &str = "1.5";

/// `submissionTime` format (UTC)
pub const SUBMISSION_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
