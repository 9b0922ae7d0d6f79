//! End-to-end manifest generation for one product directory
//!
//! scan -> describe -> assemble -> validate -> write, strictly in that order.
//! Any failure aborts the run and nothing is written.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use hls_core_manifest::{
    assemble, validate_manifest, Collection, CollectionLabels, Layout, Manifest, ManifestRequest,
    StorageLocation,
};
use tracing::info;

use crate::config::ManifestConfig;
use crate::core::{build_descriptor, scan_directory};
use crate::error::{HlsError, Result};

/// Everything one invocation needs to know about its product
#[derive(Debug, Clone)]
pub struct ManifestJob {
    pub input_dir: PathBuf,
    pub output_file: PathBuf,
    /// Target storage location, e.g. `s3://hls-global`
    pub bucket: String,
    pub collection: Collection,
    pub product: String,
    pub job_id: String,
    pub layout: Layout,
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestSummary {
    pub output_file: PathBuf,
    pub files: usize,
    pub total_bytes: u64,
}

impl ManifestJob {
    /// Reject argument combinations the layout cannot express
    pub fn validate(&self) -> Result<()> {
        if !self.layout.accepts(self.collection) {
            return Err(HlsError::Config(format!(
                "collection {} is not available with the {} layout",
                self.collection, self.layout
            )));
        }
        Ok(())
    }

    fn request(&self) -> ManifestRequest {
        ManifestRequest::new(
            self.layout,
            self.collection,
            self.product.as_str(),
            self.job_id.as_str(),
        )
    }
}

/// Scan, describe, assemble and validate, without writing anything
pub fn build_manifest(
    job: &ManifestJob,
    config: &ManifestConfig,
    submitted: DateTime<Utc>,
) -> Result<Manifest> {
    job.validate()?;
    config.validate()?;

    let table = job.layout.table();
    let location = StorageLocation::parse(&job.bucket);

    let scanned = scan_directory(&job.input_dir, table)?;
    let files = scanned
        .iter()
        .map(|file| build_descriptor(file, table, &location, config.chunk_size))
        .collect::<Result<Vec<_>>>()?;

    let manifest = assemble(&job.request(), CollectionLabels::gibs(), files, submitted);
    validate_manifest(&manifest)?;
    Ok(manifest)
}

/// Run the whole pipeline and write the manifest to `job.output_file`
pub fn generate_manifest(job: &ManifestJob, config: &ManifestConfig) -> Result<ManifestSummary> {
    info!(
        input = %job.input_dir.display(),
        output = %job.output_file.display(),
        collection = %job.collection,
        product = %job.product,
        layout = %job.layout,
        "generating manifest"
    );

    let manifest = build_manifest(job, config, Utc::now())?;
    write_manifest(&manifest, &job.output_file, config.pretty)?;

    let summary = ManifestSummary {
        output_file: job.output_file.clone(),
        files: manifest.file_count(),
        total_bytes: manifest.total_bytes(),
    };
    info!(
        output = %summary.output_file.display(),
        files = summary.files,
        total_bytes = summary.total_bytes,
        "manifest written"
    );
    Ok(summary)
}

/// Write a validated manifest, replacing any existing file
pub fn write_manifest(manifest: &Manifest, output: &Path, pretty: bool) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(HlsError::OutputDirMissing(parent.to_path_buf()));
        }
    }
    manifest.save(output, pretty)?;
    Ok(())
}
