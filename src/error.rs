/*!
 * Error types for the manifest generator
 */

use std::fmt;
use std::io;
use std::path::PathBuf;

use hls_core_manifest::Error as ManifestError;

pub type Result<T> = std::result::Result<T, HlsError>;

/// Exit code constants for structured process exit
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_IO: i32 = 1;
pub const EXIT_USAGE: i32 = 2;
pub const EXIT_INVALID: i32 = 3;

#[derive(Debug)]
pub enum HlsError {
    /// Input directory does not exist or is not a directory
    InputDirNotFound(PathBuf),

    /// Output file's parent directory does not exist
    OutputDirMissing(PathBuf),

    /// I/O error
    Io(io::Error),

    /// Argument or configuration error
    Config(String),

    /// Assembled manifest failed schema validation
    Validation(String),

    /// Other manifest library failure
    Manifest(ManifestError),

    /// Generic error with message
    Other(String),
}

/// Error category for classification and reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed or out-of-range arguments and configuration
    Argument,
    /// Filesystem errors while scanning, hashing or writing
    Io,
    /// Schema validation failures
    Validation,
    /// Errors that indicate a defect rather than bad input
    Internal,
}

impl HlsError {
    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Io => EXIT_IO,
            ErrorCategory::Argument => EXIT_USAGE,
            ErrorCategory::Validation => EXIT_INVALID,
            ErrorCategory::Internal => EXIT_IO,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> ErrorCategory {
        match self {
            HlsError::InputDirNotFound(_) | HlsError::OutputDirMissing(_) | HlsError::Io(_) => {
                ErrorCategory::Io
            }
            HlsError::Config(_) => ErrorCategory::Argument,
            HlsError::Validation(_) => ErrorCategory::Validation,
            HlsError::Manifest(err) => match err {
                ManifestError::Io(_) => ErrorCategory::Io,
                ManifestError::InvalidCollection(_) => ErrorCategory::Argument,
                ManifestError::Validation { .. } => ErrorCategory::Validation,
                _ => ErrorCategory::Internal,
            },
            HlsError::Other(_) => ErrorCategory::Internal,
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Argument => write!(f, "argument"),
            ErrorCategory::Io => write!(f, "io"),
            ErrorCategory::Validation => write!(f, "validation"),
            ErrorCategory::Internal => write!(f, "internal"),
        }
    }
}

impl fmt::Display for HlsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HlsError::InputDirNotFound(path) => {
                write!(f, "Input directory not found: {}", path.display())
            }
            HlsError::OutputDirMissing(path) => {
                write!(f, "Output directory does not exist: {}", path.display())
            }
            HlsError::Io(err) => write!(f, "I/O error: {}", err),
            HlsError::Config(msg) => write!(f, "Invalid arguments: {}", msg),
            HlsError::Validation(msg) => write!(f, "Manifest validation failed: {}", msg),
            HlsError::Manifest(err) => write!(f, "{}", err),
            HlsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for HlsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HlsError::Io(err) => Some(err),
            HlsError::Manifest(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for HlsError {
    fn from(err: io::Error) -> Self {
        HlsError::Io(err)
    }
}

impl From<walkdir::Error> for HlsError {
    fn from(err: walkdir::Error) -> Self {
        match err.into_io_error() {
            Some(io_err) => HlsError::Io(io_err),
            None => HlsError::Other("directory walk failed".to_string()),
        }
    }
}

impl From<ManifestError> for HlsError {
    fn from(err: ManifestError) -> Self {
        match err {
            ManifestError::Validation { message } => HlsError::Validation(message),
            ManifestError::Io(io_err) => HlsError::Io(io_err),
            ManifestError::InvalidCollection(c) => {
                HlsError::Config(format!("unknown collection {}", c))
            }
            other => HlsError::Manifest(other),
        }
    }
}
