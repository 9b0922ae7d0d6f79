/*!
 * HLS Manifest - archive ingest manifests for HLS product directories
 *
 * Given a directory of product files, this library:
 * - lists the files with recognized suffixes
 * - computes a streaming SHA-512 digest and size for each
 * - classifies each file as data, browse or metadata
 * - assembles a flat or nested manifest and validates it against its schema
 * - writes the manifest, never leaving a partial file behind
 */

pub mod config;
pub mod core;
pub mod error;
pub mod generate;
pub mod logging;

// Re-export commonly used types
pub use config::{LogLevel, ManifestConfig};
pub use error::{HlsError, Result};
pub use generate::{build_manifest, generate_manifest, ManifestJob, ManifestSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }
}
