//! Target storage location used to build file URIs
//!
//! The location is opaque: it is split into scheme and remainder only so it can
//! be reassembled and reported. Nothing is ever dereferenced.

use std::fmt;

/// Where delivered files will reside, e.g. `s3://hls-global`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLocation {
    scheme: Option<String>,
    rest: String,
}

impl StorageLocation {
    pub fn parse(location: &str) -> Self {
        match location.split_once("://") {
            Some((scheme, rest)) => Self {
                scheme: Some(scheme.to_string()),
                rest: rest.trim_end_matches('/').to_string(),
            },
            None => Self {
                scheme: None,
                rest: location.trim_end_matches('/').to_string(),
            },
        }
    }

    /// URI of a file stored directly under this location
    pub fn file_uri(&self, file_name: &str) -> String {
        format!("{}/{}", self, file_name)
    }
}

impl fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scheme {
            Some(scheme) => write!(f, "{}://{}", scheme, self.rest),
            None => f.write_str(&self.rest),
        }
    }
}
