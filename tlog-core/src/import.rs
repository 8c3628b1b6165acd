//! Imports a whole directory of log files.

use crate::error::ImportError;
use crate::log_set::LogSet;
use crate::paths::list_log_files;
use std::path::{Path, PathBuf};

/// Outcome of a directory import.
///
/// Files that failed don't stop the import: their errors are collected and
/// the remaining files are still read. `set` only holds entries of files that
/// parsed cleanly.
#[derive(Debug, Default)]
pub struct ImportResult {
    pub set: LogSet,
    /// Files imported successfully, in import order.
    pub files: Vec<PathBuf>,
    pub errors: Vec<ImportError>,
}

impl ImportResult {
    /// `true` when every listed file was imported.
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Imports every file of `dir` into one aggregate set.
///
/// Files are read one after the other in the order given by
/// [`list_log_files`], and their entries are appended in that order.
pub fn import_dir(dir: &Path) -> ImportResult {
    let mut result = ImportResult::default();

    let files = match list_log_files(dir) {
        Ok(files) => files,
        Err(source) => {
            tracing::warn!(dir = %dir.display(), error = %source, "can't list log directory");
            result.errors.push(ImportError::Io {
                path: dir.to_path_buf(),
                source,
            });
            return result;
        }
    };

    for path in files {
        match LogSet::from_file(&path) {
            Ok(set) => {
                result.set.append(set);
                result.files.push(path);
            }
            Err(error) => {
                tracing::debug!(%error, "skipping log file");
                result.errors.push(error);
            }
        }
    }

    tracing::debug!(
        dir = %dir.display(),
        files = result.files.len(),
        failed = result.errors.len(),
        entries = result.set.len(),
        "imported log directory"
    );
    result
}
