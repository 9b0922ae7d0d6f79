//! Manifest data structures and the manifest writer
//!
//! A manifest describes one HLS product: job and collection metadata plus one
//! [`FileDescriptor`] per delivered file. Two product shapes exist, selected by
//! [`Layout`]; see [`Product`].

use crate::classify::{Classification, FileType, Layout};
use crate::error::Result;
use crate::CHECKSUM_TYPE;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Per-file entry of a manifest
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileDescriptor {
    /// Base name of the file
    pub name: String,

    /// File size in bytes
    pub size: u64,

    /// Lowercase hex digest of the full file content
    pub checksum: String,

    /// Digest algorithm label
    #[serde(rename = "checksumType")]
    pub checksum_type: String,

    /// Target location of the file
    pub uri: String,

    /// File role
    #[serde(rename = "type")]
    pub file_type: FileType,

    /// Finer classification (GIBS rule set only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,

    /// Per-file data version (flat layout only)
    #[serde(rename = "dataVersion", skip_serializing_if = "Option::is_none")]
    pub data_version: Option<String>,
}

impl FileDescriptor {
    /// Create a descriptor from a classification result
    pub fn new<S: Into<String>>(
        name: S,
        size: u64,
        checksum: String,
        uri: String,
        class: Classification,
    ) -> Self {
        Self {
            name: name.into(),
            size,
            checksum,
            checksum_type: CHECKSUM_TYPE.to_string(),
            uri,
            file_type: class.file_type,
            subtype: class.subtype.map(str::to_string),
            data_version: None,
        }
    }

    /// Stamp a per-file data version
    pub fn with_data_version<S: Into<String>>(mut self, version: S) -> Self {
        self.data_version = Some(version.into());
        self
    }
}

/// Top-level manifest record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Manifest {
    /// Collection label; absent when GIBS naming has no label for the collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,

    /// Job identifier
    pub identifier: String,

    /// Raw product identifier (nested layout only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicationid: Option<String>,

    /// Manifest schema version
    pub version: String,

    /// Assembly time, `%Y-%m-%dT%H:%M:%SZ`
    #[serde(rename = "submissionTime")]
    pub submission_time: String,

    pub product: Product,
}

/// Product section; its shape depends on the layout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Product {
    Nested(NestedProduct),
    Flat(FlatProduct),
}

/// `{ name, dataVersion, id, files }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NestedProduct {
    pub name: String,

    #[serde(rename = "dataVersion")]
    pub data_version: String,

    pub id: String,

    pub files: Vec<FileDescriptor>,
}

/// `{ name, filegroups: [{ id, files }] }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlatProduct {
    pub name: String,
    pub filegroups: Vec<FileGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileGroup {
    pub id: String,
    pub files: Vec<FileDescriptor>,
}

impl Product {
    /// Product name as written to the manifest
    pub fn name(&self) -> &str {
        match self {
            Product::Nested(p) => &p.name,
            Product::Flat(p) => &p.name,
        }
    }

    /// All file descriptors, across file groups
    pub fn files(&self) -> impl Iterator<Item = &FileDescriptor> {
        let (nested, flat) = match self {
            Product::Nested(p) => (Some(p.files.iter()), None),
            Product::Flat(p) => (None, Some(p.filegroups.iter().flat_map(|g| g.files.iter()))),
        };
        nested.into_iter().flatten().chain(flat.into_iter().flatten())
    }
}

impl Manifest {
    /// Whether this manifest uses the flat file-group shape
    pub fn is_flat(&self) -> bool {
        matches!(self.product, Product::Flat(_))
    }

    /// Schema family matching the product shape
    pub fn schema_name(&self) -> &'static str {
        if self.is_flat() {
            Layout::Flat.schema_name()
        } else {
            Layout::Nested { gibs: false }.schema_name()
        }
    }

    /// Number of file descriptors
    pub fn file_count(&self) -> usize {
        self.product.files().count()
    }

    /// Sum of all file sizes in bytes
    pub fn total_bytes(&self) -> u64 {
        self.product.files().map(|f| f.size).sum()
    }

    /// Serialize to a JSON string
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Write the manifest to `path`, replacing any existing file
    ///
    /// The document is staged in a temporary file next to `path` and renamed into
    /// place, so a failed write never leaves a partial manifest behind.
    pub fn save<P: AsRef<Path>>(&self, path: P, pretty: bool) -> Result<()> {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let json = self.to_json(pretty)?;
        let mut staged = NamedTempFile::new_in(parent)?;
        staged.write_all(json.as_bytes())?;
        staged.as_file().sync_all()?;
        staged.persist(path).map_err(|e| e.error)?;

        tracing::debug!(path = %path.display(), bytes = json.len(), "manifest written");
        Ok(())
    }

    /// Load a manifest from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}
