//! Manifest layouts, collections and the suffix classification tables
//!
//! Classification is table driven: each layout owns a static [`ClassificationTable`]
//! mapping file-name suffixes to a role and optional subtype. Tables are passed
//! explicitly to whoever classifies files so that nothing depends on hidden state.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shape of the manifest and the rule set used to classify files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Legacy shape: `product.filegroups[0].files`
    Flat,
    /// Product-with-files shape; `gibs` selects GIBS naming and classification
    Nested { gibs: bool },
}

impl Layout {
    /// Whether GIBS naming is in effect
    pub fn gibs(&self) -> bool {
        matches!(self, Layout::Nested { gibs: true })
    }

    /// Classification table for this layout
    pub fn table(&self) -> &'static ClassificationTable {
        match self {
            Layout::Flat => &FLAT_TABLE,
            Layout::Nested { gibs: false } => &STANDARD_TABLE,
            Layout::Nested { gibs: true } => &GIBS_TABLE,
        }
    }

    /// Name of the schema document this layout validates against
    pub fn schema_name(&self) -> &'static str {
        match self {
            Layout::Flat => "cumulus_sns_v1.4",
            Layout::Nested { .. } => "cumulus_sns_v1.4.1",
        }
    }

    /// Collections accepted by this layout
    pub fn accepts(&self, collection: Collection) -> bool {
        match self {
            Layout::Flat => matches!(collection, Collection::HlsS30 | Collection::HlsL30),
            Layout::Nested { .. } => true,
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Flat => write!(f, "flat"),
            Layout::Nested { gibs: false } => write!(f, "nested"),
            Layout::Nested { gibs: true } => write!(f, "nested+gibs"),
        }
    }
}

/// HLS product collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Sentinel-2 derived surface reflectance
    HlsS30,
    /// Landsat derived surface reflectance
    HlsL30,
    /// Sentinel-2 derived vegetation indices
    HlsS30Vi,
    /// Landsat derived vegetation indices
    HlsL30Vi,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::HlsS30,
        Collection::HlsL30,
        Collection::HlsS30Vi,
        Collection::HlsL30Vi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::HlsS30 => "HLSS30",
            Collection::HlsL30 => "HLSL30",
            Collection::HlsS30Vi => "HLSS30_VI",
            Collection::HlsL30Vi => "HLSL30_VI",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Collection::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::InvalidCollection(s.to_string()))
    }
}

/// Role of a file within a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Data,
    Browse,
    Metadata,
}

/// Role and optional subtype assigned to a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub file_type: FileType,
    pub subtype: Option<&'static str>,
}

impl Classification {
    const fn of(file_type: FileType) -> Self {
        Self {
            file_type,
            subtype: None,
        }
    }

    const fn with_subtype(file_type: FileType, subtype: &'static str) -> Self {
        Self {
            file_type,
            subtype: Some(subtype),
        }
    }
}

/// A single `suffix -> classification` rule
#[derive(Debug, Clone, Copy)]
pub struct SuffixRule {
    pub suffix: &'static str,
    pub class: Classification,
}

/// Ordered suffix rules plus the per-file data version used by a layout
#[derive(Debug)]
pub struct ClassificationTable {
    rules: &'static [SuffixRule],
    file_data_version: Option<&'static str>,
}

impl ClassificationTable {
    /// Classify a file name; `None` means the file is not part of the manifest
    pub fn classify(&self, name: &str) -> Option<Classification> {
        self.rules
            .iter()
            .find(|rule| name.ends_with(rule.suffix))
            .map(|rule| rule.class)
    }

    /// Whether a file name carries a recognized suffix
    pub fn recognizes(&self, name: &str) -> bool {
        self.classify(name).is_some()
    }

    /// Data version stamped on each file descriptor, if the layout has one
    pub fn file_data_version(&self) -> Option<&'static str> {
        self.file_data_version
    }

    /// Suffixes this table recognizes
    pub fn suffixes(&self) -> impl Iterator<Item = &'static str> {
        self.rules.iter().map(|rule| rule.suffix)
    }
}

static FLAT_TABLE: ClassificationTable = ClassificationTable {
    rules: &[
        SuffixRule {
            suffix: ".tif",
            class: Classification::of(FileType::Data),
        },
        SuffixRule {
            suffix: ".xml",
            class: Classification::of(FileType::Metadata),
        },
        SuffixRule {
            suffix: ".jpg",
            class: Classification::of(FileType::Browse),
        },
    ],
    file_data_version: Some(crate::FLAT_FILE_DATA_VERSION),
};

static STANDARD_TABLE: ClassificationTable = ClassificationTable {
    rules: &[
        SuffixRule {
            suffix: ".tif",
            class: Classification::of(FileType::Data),
        },
        SuffixRule {
            suffix: ".xml",
            class: Classification::of(FileType::Metadata),
        },
        SuffixRule {
            suffix: ".jpg",
            class: Classification::of(FileType::Browse),
        },
        SuffixRule {
            suffix: "_stac.json",
            class: Classification::of(FileType::Metadata),
        },
    ],
    file_data_version: None,
};

static GIBS_TABLE: ClassificationTable = ClassificationTable {
    rules: &[
        SuffixRule {
            suffix: ".tif",
            class: Classification::with_subtype(FileType::Browse, "geotiff"),
        },
        SuffixRule {
            suffix: ".xml",
            class: Classification::with_subtype(FileType::Metadata, "ImageMetadata-v1.2"),
        },
        SuffixRule {
            suffix: ".jpg",
            class: Classification::of(FileType::Browse),
        },
        SuffixRule {
            suffix: "_stac.json",
            class: Classification::of(FileType::Metadata),
        },
    ],
    file_data_version: None,
};

/// Long-form collection labels keyed by collection
#[derive(Debug)]
pub struct CollectionLabels {
    entries: &'static [(Collection, &'static str)],
}

impl CollectionLabels {
    /// Labels used when publishing to GIBS
    pub fn gibs() -> &'static CollectionLabels {
        &GIBS_LABELS
    }

    pub fn resolve(&self, collection: Collection) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == collection)
            .map(|(_, label)| *label)
    }
}

static GIBS_LABELS: CollectionLabels = CollectionLabels {
    entries: &[
        (
            Collection::HlsS30,
            "HLS_S30_Nadir_BRDF_Adjusted_Reflectance_v2.0_STD",
        ),
        (
            Collection::HlsL30,
            "HLS_L30_Nadir_BRDF_Adjusted_Reflectance_v2.0_STD",
        ),
    ],
};
