/*!
 * Directory scanning: list the files a manifest should describe
 */

use std::path::{Path, PathBuf};

use hls_core_manifest::{Classification, ClassificationTable};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{HlsError, Result};

/// A directory entry that passed suffix filtering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    /// Base name
    pub name: String,
    /// Full path
    pub path: PathBuf,
    /// Role assigned by the layout's table
    pub class: Classification,
}

/// List regular files directly under `dir` whose names `table` recognizes
///
/// Entries come back sorted by file name. Subdirectories, non-UTF-8 names and
/// unrecognized suffixes are skipped without error. An entry that cannot be
/// read (a dangling symlink, say) is only an error if its name is recognized.
pub fn scan_directory(dir: &Path, table: &ClassificationTable) -> Result<Vec<ScannedFile>> {
    if !dir.is_dir() {
        return Err(HlsError::InputDirNotFound(dir.to_path_buf()));
    }

    debug!(
        dir = %dir.display(),
        suffixes = ?table.suffixes().collect::<Vec<_>>(),
        "scanning input directory"
    );

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let recognized = err
                    .path()
                    .and_then(Path::file_name)
                    .and_then(|name| name.to_str())
                    .map_or(true, |name| table.recognizes(name));
                if recognized {
                    return Err(err.into());
                }
                debug!(path = ?err.path(), error = %err, "skipping unreadable unrecognized entry");
                continue;
            }
        };

        let Some(name) = entry.file_name().to_str() else {
            let lossy = entry.file_name().to_string_lossy();
            if table.recognizes(&lossy) {
                warn!(entry = %lossy, "omitting file with non UTF-8 name");
            } else {
                debug!(entry = %lossy, "skipping non UTF-8 name");
            }
            continue;
        };

        let Some(class) = table.classify(name) else {
            debug!(name, "skipping unrecognized file");
            continue;
        };

        if !entry.file_type().is_file() {
            debug!(name, "skipping non-file entry");
            continue;
        }

        let name = name.to_string();
        files.push(ScannedFile {
            name,
            path: entry.into_path(),
            class,
        });
    }

    Ok(files)
}
