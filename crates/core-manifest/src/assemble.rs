//! Manifest assembly
//!
//! Pure aggregation: turns file descriptors plus job parameters into a [`Manifest`]
//! of the requested [`Layout`]. No I/O happens here.

use crate::classify::{Collection, CollectionLabels, Layout};
use crate::manifest::{FileDescriptor, FileGroup, FlatProduct, Manifest, NestedProduct, Product};
use crate::{MANIFEST_VERSION, NESTED_PRODUCT_DATA_VERSION, SUBMISSION_TIME_FORMAT};
use chrono::{DateTime, Utc};

/// Scalar job parameters for one manifest
#[derive(Debug, Clone)]
pub struct ManifestRequest {
    pub layout: Layout,
    pub collection: Collection,
    /// Root product identifier, no extension
    pub product: String,
    /// Job identifier, used verbatim
    pub job_id: String,
}

impl ManifestRequest {
    pub fn new<P: Into<String>, J: Into<String>>(
        layout: Layout,
        collection: Collection,
        product: P,
        job_id: J,
    ) -> Self {
        Self {
            layout,
            collection,
            product: product.into(),
            job_id: job_id.into(),
        }
    }

    /// Collection label written to the manifest
    ///
    /// Returns `None` when GIBS naming is requested for a collection without a
    /// long-form label.
    pub fn collection_label(&self, labels: &CollectionLabels) -> Option<String> {
        if self.layout.gibs() {
            labels.resolve(self.collection).map(str::to_string)
        } else {
            Some(self.collection.as_str().to_string())
        }
    }

    /// Product name written to the manifest
    pub fn product_name(&self) -> &str {
        if self.layout.gibs() {
            truncate_product(&self.product)
        } else {
            &self.product
        }
    }
}

/// Product identifier up to the first `_`
pub fn truncate_product(product: &str) -> &str {
    product.split('_').next().unwrap_or(product)
}

/// Assemble a manifest from its file descriptors
pub fn assemble(
    request: &ManifestRequest,
    labels: &CollectionLabels,
    files: Vec<FileDescriptor>,
    submitted: DateTime<Utc>,
) -> Manifest {
    let collection = request.collection_label(labels);
    if collection.is_none() {
        tracing::warn!(
            collection = %request.collection,
            "no GIBS label for collection; manifest will omit it"
        );
    }

    let name = request.product_name().to_string();
    let (duplicationid, product) = match request.layout {
        Layout::Nested { .. } => (
            Some(request.product.clone()),
            Product::Nested(NestedProduct {
                name,
                data_version: NESTED_PRODUCT_DATA_VERSION.to_string(),
                id: request.product.clone(),
                files,
            }),
        ),
        Layout::Flat => (
            None,
            Product::Flat(FlatProduct {
                name,
                filegroups: vec![FileGroup {
                    id: request.product.clone(),
                    files,
                }],
            }),
        ),
    };

    Manifest {
        collection,
        identifier: request.job_id.clone(),
        duplicationid,
        version: MANIFEST_VERSION.to_string(),
        submission_time: submitted.format(SUBMISSION_TIME_FORMAT).to_string(),
        product,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{Classification, FileType};
    use chrono::TimeZone;

    fn submitted() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 4, 25, 17, 5, 9).unwrap()
    }

    fn file(name: &str) -> FileDescriptor {
        FileDescriptor::new(
            name,
            10,
            "a".repeat(128),
            format!("s3://hls-global/{}", name),
            Classification {
                file_type: FileType::Data,
                subtype: None,
            },
        )
    }

    #[test]
    fn test_truncate_product() {
        assert_eq!(truncate_product("HLS.S30.2020116.099152_6"), "HLS.S30.2020116.099152");
        assert_eq!(truncate_product("a_b_c"), "a");
        assert_eq!(truncate_product("no-separator"), "no-separator");
        assert_eq!(truncate_product("_leading"), "");
    }

    #[test]
    fn test_gibs_manifest() {
        let request = ManifestRequest::new(
            Layout::Nested { gibs: true },
            Collection::HlsS30,
            "HLS.S30.2020116.099152_6",
            "job-42",
        );
        let manifest = assemble(
            &request,
            CollectionLabels::gibs(),
            vec![file("bar.tif")],
            submitted(),
        );

        assert_eq!(
            manifest.collection.as_deref(),
            Some("HLS_S30_Nadir_BRDF_Adjusted_Reflectance_v2.0_STD")
        );
        assert_eq!(manifest.identifier, "job-42");
        assert_eq!(manifest.duplicationid.as_deref(), Some("HLS.S30.2020116.099152_6"));
        assert_eq!(manifest.version, "1.4");
        assert_eq!(manifest.submission_time, "2020-04-25T17:05:09Z");

        match &manifest.product {
            Product::Nested(p) => {
                assert_eq!(p.name, "HLS.S30.2020116.099152");
                assert_eq!(p.id, "HLS.S30.2020116.099152_6");
                assert_eq!(p.data_version, "2.0");
                assert_eq!(p.files.len(), 1);
            }
            Product::Flat(_) => panic!("expected nested product"),
        }
    }

    #[test]
    fn test_nested_without_gibs_keeps_raw_values() {
        let request = ManifestRequest::new(
            Layout::Nested { gibs: false },
            Collection::HlsL30Vi,
            "HLS.L30.T01LAH_v2",
            "job",
        );
        let manifest = assemble(&request, CollectionLabels::gibs(), vec![], submitted());

        assert_eq!(manifest.collection.as_deref(), Some("HLSL30_VI"));
        assert_eq!(manifest.product.name(), "HLS.L30.T01LAH_v2");
        assert_eq!(manifest.file_count(), 0);
    }

    #[test]
    fn test_gibs_without_label_omits_collection() {
        let request = ManifestRequest::new(
            Layout::Nested { gibs: true },
            Collection::HlsS30Vi,
            "HLS.S30.X_1",
            "job",
        );
        let manifest = assemble(&request, CollectionLabels::gibs(), vec![], submitted());
        assert!(manifest.collection.is_none());
    }

    #[test]
    fn test_flat_manifest() {
        let request = ManifestRequest::new(
            Layout::Flat,
            Collection::HlsS30,
            "HLS.S30.T01LAH.2020097T222759.v1.5",
            "test",
        );
        let manifest = assemble(
            &request,
            CollectionLabels::gibs(),
            vec![file("foo.tif"), file("foo.xml")],
            submitted(),
        );

        assert_eq!(manifest.collection.as_deref(), Some("HLSS30"));
        assert!(manifest.duplicationid.is_none());
        assert_eq!(manifest.version, "1.4");

        match &manifest.product {
            Product::Flat(p) => {
                assert_eq!(p.name, "HLS.S30.T01LAH.2020097T222759.v1.5");
                assert_eq!(p.filegroups.len(), 1);
                assert_eq!(p.filegroups[0].id, "HLS.S30.T01LAH.2020097T222759.v1.5");
                assert_eq!(p.filegroups[0].files.len(), 2);
            }
            Product::Nested(_) => panic!("expected flat product"),
        }
    }

    #[test]
    fn test_flat_name_is_never_truncated() {
        let request = ManifestRequest::new(Layout::Flat, Collection::HlsL30, "A_B", "j");
        assert_eq!(request.product_name(), "A_B");
    }
}
