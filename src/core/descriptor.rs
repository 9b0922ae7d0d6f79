/*!
 * File descriptor construction: size, digest and target URI for one file
 */

use hls_core_manifest::{ClassificationTable, FileDescriptor, StorageLocation};
use tracing::debug;

use super::checksum::calculate_checksum;
use super::scan::ScannedFile;
use crate::error::Result;

/// Build the manifest entry for one scanned file
///
/// Fails with an I/O error if the file disappeared or became unreadable after
/// the directory was listed.
pub fn build_descriptor(
    file: &ScannedFile,
    table: &ClassificationTable,
    location: &StorageLocation,
    chunk_size: usize,
) -> Result<FileDescriptor> {
    let size = std::fs::metadata(&file.path)?.len();
    let checksum = calculate_checksum(&file.path, chunk_size)?;

    let mut descriptor = FileDescriptor::new(
        file.name.as_str(),
        size,
        checksum,
        location.file_uri(&file.name),
        file.class,
    );
    if let Some(version) = table.file_data_version() {
        descriptor = descriptor.with_data_version(version);
    }

    debug!(
        name = %descriptor.name,
        size,
        file_type = ?descriptor.file_type,
        "described file"
    );
    Ok(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::checksum::{StreamingHasher, DEFAULT_CHUNK_SIZE};
    use crate::core::scan::scan_directory;
    use crate::error::HlsError;
    use hls_core_manifest::{FileType, Layout};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_gibs_descriptor() {
        let dir = tempdir().unwrap();
        let data = vec![0xABu8; 1024];
        fs::write(dir.path().join("bar.tif"), &data).unwrap();

        let table = Layout::Nested { gibs: true }.table();
        let scanned = scan_directory(dir.path(), table).unwrap();
        let location = StorageLocation::parse("s3://hls-global");

        let d = build_descriptor(&scanned[0], table, &location, DEFAULT_CHUNK_SIZE).unwrap();

        let mut hasher = StreamingHasher::new();
        hasher.update(&data);
        assert_eq!(d.name, "bar.tif");
        assert_eq!(d.size, 1024);
        assert_eq!(d.checksum, hasher.finalize_hex());
        assert_eq!(d.checksum_type, "SHA512");
        assert_eq!(d.uri, "s3://hls-global/bar.tif");
        assert_eq!(d.file_type, FileType::Browse);
        assert_eq!(d.subtype.as_deref(), Some("geotiff"));
        assert!(d.data_version.is_none());
    }

    #[test]
    fn test_flat_descriptor_carries_data_version() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("foo.xml"), b"<metadata/>").unwrap();

        let table = Layout::Flat.table();
        let scanned = scan_directory(dir.path(), table).unwrap();
        let location = StorageLocation::parse("s3://hls-global/");

        let d = build_descriptor(&scanned[0], table, &location, DEFAULT_CHUNK_SIZE).unwrap();
        assert_eq!(d.file_type, FileType::Metadata);
        assert!(d.subtype.is_none());
        assert_eq!(d.data_version.as_deref(), Some("1.5"));
        assert_eq!(d.uri, "s3://hls-global/foo.xml");
    }

    #[test]
    fn test_vanished_file_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gone.tif");
        fs::write(&path, b"x").unwrap();

        let table = Layout::Flat.table();
        let scanned = scan_directory(dir.path(), table).unwrap();
        fs::remove_file(&path).unwrap();

        let result = build_descriptor(
            &scanned[0],
            table,
            &StorageLocation::parse("s3://b"),
            DEFAULT_CHUNK_SIZE,
        );
        assert!(matches!(result, Err(HlsError::Io(_))));
    }
}
