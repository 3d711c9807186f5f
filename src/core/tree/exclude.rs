//! Names skipped during traversal.
//!
//! Matching is exact: an entry is excluded when its file name equals one of
//! the configured names, whether it is a file or a directory.

use std::collections::BTreeSet;
use std::ffi::{OsStr, OsString};

/// Entry names always skipped by the default configuration.
pub const EXCLUDED_NAMES: &[&str] = &["node_modules"];

/// Set of entry names omitted from output and never traversed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    names: BTreeSet<OsString>,
}

impl ExclusionSet {
    /// Empty set: nothing is excluded.
    #[cfg(test)]
    pub fn empty() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    /// Build a set from any list of names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if an entry with this file name must be skipped.
    pub fn contains(&self, name: &OsStr) -> bool {
        self.names.contains(name)
    }

    /// Excluded names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &OsStr> {
        self.names.iter().map(OsString::as_os_str)
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::from_names(EXCLUDED_NAMES.iter().copied())
    }
}
