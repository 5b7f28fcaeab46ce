//! Level catalog: enumerates the playable level files shipped in a directory.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::core::{Level, LevelError, load_from_file};

#[derive(Debug, Error)]
pub enum LevelDirectoryError {
    #[error("levels directory not found: {0}")]
    MissingDirectory(PathBuf),
    #[error("no level files found in {0}")]
    NoLevelFiles(PathBuf),
    #[error("failed to scan levels directory: {0}")]
    Io(#[from] std::io::Error),
}

/// One playable level on disk. `name` is the file stem and doubles as the
/// level identifier callers attach to play results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelInfo {
    pub name: String,
    pub path: PathBuf,
}

impl LevelInfo {
    pub fn load(&self) -> Result<Level, LevelError> {
        load_from_file(&self.path)
    }
}

/// Lists the `.txt` level files under `<base_directory>/levels`, ordered
/// case-insensitively by path. An absent or empty directory is fatal: a game
/// with no levels to offer cannot start.
pub fn load_levels<P: AsRef<Path>>(
    base_directory: P,
) -> Result<Vec<LevelInfo>, LevelDirectoryError> {
    let levels_path = base_directory.as_ref().join("levels");

    if !levels_path.is_dir() {
        return Err(LevelDirectoryError::MissingDirectory(levels_path));
    }

    let mut files: Vec<PathBuf> = fs::read_dir(&levels_path)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
        })
        .collect();
    files.sort_by_key(|path| path.to_string_lossy().to_lowercase());

    if files.is_empty() {
        return Err(LevelDirectoryError::NoLevelFiles(levels_path));
    }

    let result: Vec<LevelInfo> = files
        .into_iter()
        .map(|path| {
            let name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            LevelInfo { name, path }
        })
        .collect();

    info!(count = result.len(), "discovered level files");
    Ok(result)
}
