/*!
 * Configuration types for the manifest generator
 */

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{HlsError, Result};

/// Runtime configuration; loaded from TOML and overridden by CLI flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// Logging level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Write logs as JSON lines to this file instead of stderr
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Force debug logging
    #[serde(default)]
    pub verbose: bool,

    /// Read size in bytes while hashing files
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Indent the written manifest
    #[serde(default)]
    pub pretty: bool,
}

/// Logging level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only errors
    Error,

    /// Warnings and errors
    Warn,

    /// Info, warnings, and errors
    #[default]
    Info,

    /// Debug and above
    Debug,

    /// All messages including traces
    Trace,
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

fn default_chunk_size() -> usize {
    8192
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            log_file: None,
            verbose: false,
            chunk_size: default_chunk_size(),
            pretty: false,
        }
    }
}

impl ManifestConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            HlsError::Config(format!("cannot read config {}: {}", path.display(), e))
        })?;
        let config: ManifestConfig = toml::from_str(&contents).map_err(|e| {
            HlsError::Config(format!("cannot parse config {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the pipeline cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(HlsError::Config("chunk_size must be greater than 0".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_values() {
        let config = ManifestConfig::default();
        assert_eq!(config.chunk_size, 8192);
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(!config.pretty);
        assert!(!config.verbose);
        assert!(config.log_file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ManifestConfig = toml::from_str("pretty = true\nlog_level = \"debug\"").unwrap();
        assert!(config.pretty);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.chunk_size, 8192);
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "chunk_size = 65536").unwrap();
        writeln!(file, "log_file = \"/tmp/hls.log\"").unwrap();
        file.flush().unwrap();

        let config = ManifestConfig::from_file(file.path()).unwrap();
        assert_eq!(config.chunk_size, 65536);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/hls.log")));
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "chunk_size = 0").unwrap();
        file.flush().unwrap();

        let err = ManifestConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, HlsError::Config(_)));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "pretty = \"sometimes\"").unwrap();
        file.flush().unwrap();

        assert!(matches!(
            ManifestConfig::from_file(file.path()),
            Err(HlsError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = ManifestConfig::from_file(Path::new("/nonexistent/hls.toml")).unwrap_err();
        assert!(err.to_string().contains("cannot read config"));
    }

    #[test]
    fn test_tracing_levels() {
        assert_eq!(LogLevel::Warn.to_tracing_level(), tracing::Level::WARN);
        assert_eq!(LogLevel::Trace.to_tracing_level(), tracing::Level::TRACE);
    }
}
