use crate::archive::ARCHIVE_DIR;
use crate::error::{Result, VisaScoreError};
use crate::types::application::ApplicationRecord;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Raw bytes and decoded record of one application file.
#[derive(Debug, Clone)]
pub struct LoadedApplication {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    pub record: ApplicationRecord,
}

pub fn read_application(path: &Path) -> Result<LoadedApplication> {
    if !path.exists() {
        return Err(VisaScoreError::PathNotFound(path.display().to_string()));
    }
    let bytes = std::fs::read(path)?;
    let record =
        ApplicationRecord::from_slice(&bytes).map_err(|e| VisaScoreError::InvalidApplication {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
    Ok(LoadedApplication {
        path: path.to_path_buf(),
        bytes,
        record,
    })
}

/// A directory entry the walk could not read.
#[derive(Debug, Clone, PartialEq)]
pub struct UnreadableEntry {
    pub path: PathBuf,
    pub reason: String,
}

/// Application files found under a root, plus the entries that could not be walked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Discovery {
    pub files: Vec<PathBuf>,
    pub unreadable: Vec<UnreadableEntry>,
}

/// Every `*.json` file under `root`, sorted by path. The archive directory is skipped.
pub fn list_application_files(root: &Path) -> Discovery {
    let mut discovery = Discovery::default();
    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || entry.file_name() != ARCHIVE_DIR);
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                discovery.unreadable.push(UnreadableEntry {
                    path: err.path().unwrap_or(root).to_path_buf(),
                    reason: err.to_string(),
                });
                continue;
            }
        };
        let is_json = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if entry.file_type().is_file() && is_json {
            discovery.files.push(entry.path().to_path_buf());
        }
    }
    discovery.files.sort();
    discovery
}
