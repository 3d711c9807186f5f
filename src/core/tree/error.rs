//! Traversal error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a traversal.
///
/// A directory whose listing is denied is not an error: it is reported as
/// [`Listing::Denied`](super::Listing::Denied) and the traversal goes on.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("cannot list {}: {source}", .path.display())]
    List {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

impl TreeError {
    /// True when the output sink was closed by the reader (e.g. `dirtree | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, TreeError::Write(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}
