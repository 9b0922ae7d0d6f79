/*!
 * Streaming SHA-512 checksums over bounded reads
 */

use crate::error::Result;
use sha2::{Digest, Sha512};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default read size while hashing
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// Streaming hasher that calculates checksum incrementally
pub struct StreamingHasher {
    hasher: Sha512,
}

impl StreamingHasher {
    /// Create a new streaming hasher
    pub fn new() -> Self {
        Self {
            hasher: Sha512::new(),
        }
    }

    /// Update the hash with new data
    pub fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    /// Finalize and return the lowercase hex digest
    pub fn finalize_hex(self) -> String {
        hex::encode(self.hasher.finalize())
    }
}

impl Default for StreamingHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash everything a reader yields, `chunk_size` bytes at a time
pub fn checksum_reader<R: Read>(mut reader: R, chunk_size: usize) -> Result<String> {
    let mut hasher = StreamingHasher::new();
    let mut buffer = vec![0u8; chunk_size.max(1)];

    loop {
        let n = reader.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(hasher.finalize_hex())
}

/// Calculate the SHA-512 checksum of a file
///
/// The file handle is dropped on return, on both the success and error paths.
pub fn calculate_checksum(path: &Path, chunk_size: usize) -> Result<String> {
    let file = File::open(path)?;
    checksum_reader(file, chunk_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    // SHA-512 of "hello world"
    const HELLO_WORLD: &str = "309ecc489c12d6eb4cc40f50c902f2b4d0ed77ee511a7c7a9bcd3ca86d4cd86f\
                               989dd35bc5ff499670da34255b45b0cfd830e81f605dcf7dc5542e93ae9cd76f";

    // SHA-512 of the empty input
    const EMPTY: &str = "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
                         47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e";

    #[test]
    fn test_streaming_hasher() {
        let mut hasher = StreamingHasher::new();
        hasher.update(b"hello ");
        hasher.update(b"world");
        assert_eq!(hasher.finalize_hex(), HELLO_WORLD);
    }

    #[test]
    fn test_chunk_size_does_not_change_digest() {
        let data = b"hello world";
        assert_eq!(checksum_reader(&data[..], 1).unwrap(), HELLO_WORLD);
        assert_eq!(checksum_reader(&data[..], 4).unwrap(), HELLO_WORLD);
        assert_eq!(checksum_reader(&data[..], 8192).unwrap(), HELLO_WORLD);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(checksum_reader(&b""[..], 8192).unwrap(), EMPTY);
    }

    #[test]
    fn test_calculate_checksum() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(&vec![7u8; 3 * DEFAULT_CHUNK_SIZE + 11]).unwrap();
        temp.flush().unwrap();

        let checksum = calculate_checksum(temp.path(), DEFAULT_CHUNK_SIZE).unwrap();
        assert_eq!(checksum.len(), 128);
        assert!(checksum.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));

        let mut hasher = StreamingHasher::new();
        hasher.update(&vec![7u8; 3 * DEFAULT_CHUNK_SIZE + 11]);
        assert_eq!(checksum, hasher.finalize_hex());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = calculate_checksum(Path::new("/nonexistent/file.tif"), DEFAULT_CHUNK_SIZE);
        assert!(matches!(result, Err(crate::error::HlsError::Io(_))));
    }
}
