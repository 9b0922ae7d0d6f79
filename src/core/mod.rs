/*!
 * Manifest pipeline stages that touch the filesystem
 */

pub mod checksum;
pub mod descriptor;
pub mod scan;

pub use checksum::{calculate_checksum, StreamingHasher};
pub use descriptor::build_descriptor;
pub use scan::{scan_directory, ScannedFile};
