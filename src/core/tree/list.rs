//! One-level directory listing: read, filter exclusions, sort by name.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{ExclusionSet, TreeError};

/// A retained directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: OsString,
    pub path: PathBuf,
    /// Directory, or symlink resolving to one.
    pub is_dir: bool,
}

impl Entry {
    /// Name as printed. Invalid UTF-8 sequences are replaced.
    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }
}

/// Result of listing one directory.
#[derive(Debug)]
pub enum Listing {
    /// Entries after exclusion filtering, in ascending name order.
    Entries(Vec<Entry>),
    /// Permission to read the directory was refused.
    Denied,
}

/// List the immediate entries of `dir`.
///
/// Only `PermissionDenied` is recoverable; any other I/O failure is returned
/// as [`TreeError::List`].
pub fn list_dir(dir: &Path, exclusions: &ExclusionSet) -> Result<Listing, TreeError> {
    match read_entries(dir, exclusions) {
        Ok(entries) => Ok(Listing::Entries(entries)),
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => Ok(Listing::Denied),
        Err(source) => Err(TreeError::List {
            path: dir.to_path_buf(),
            source,
        }),
    }
}

fn read_entries(dir: &Path, exclusions: &ExclusionSet) -> io::Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for dent in fs::read_dir(dir)? {
        let dent = dent?;
        let name = dent.file_name();
        if exclusions.contains(&name) {
            continue;
        }
        let path = dent.path();
        // Path::is_dir follows symlinks and treats stat failures as "not a directory".
        let is_dir = path.is_dir();
        entries.push(Entry { name, path, is_dir });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
