//! Resolve what to print: the root directory and the exclusion set.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::tree::ExclusionSet;

/// Root used when no path is given on the command line.
const DEFAULT_ROOT: &str = ".";

#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub exclusions: ExclusionSet,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Build the configuration. Defaults the root to the current directory and
/// rejects roots that are missing or are not directories.
///
/// A root that cannot be inspected for lack of permission is accepted; the
/// printer then reports it as an unreadable directory.
pub fn load(path: Option<PathBuf>) -> Result<Config, ConfigError> {
    let root = path.unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT));

    match fs::metadata(&root) {
        Ok(meta) if !meta.is_dir() => return Err(ConfigError::NotADirectory(root)),
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            log::debug!("Cannot inspect {}: permission denied", root.display());
        }
        Err(_) => return Err(ConfigError::NotFound(root)),
    }

    Ok(Config {
        root,
        exclusions: ExclusionSet::default(),
    })
}
