//! Line-art rendering of a directory hierarchy.
//!
//! Traversal is depth-first pre-order. Instead of recursing per directory, the
//! printer keeps an explicit stack of frames, each holding the remaining
//! sorted siblings of one directory and the prefix drawn before them, so deep
//! hierarchies do not grow the call stack.

use std::io::Write;
use std::path::{Path, PathBuf};

use super::{Entry, ExclusionSet, Listing, TreeError, list_dir};

/// Line printed for the root directory.
pub const ROOT_LINE: &str = ".";
/// Connector for every sibling except the last.
pub const BRANCH: &str = "├── ";
/// Connector for the last sibling.
pub const LAST_BRANCH: &str = "└── ";
/// Child prefix segment below a non-last sibling.
pub const CONTINUATION: &str = "│   ";
/// Child prefix segment below the last sibling.
pub const BLANK: &str = "    ";

/// What a traversal printed and what it had to skip.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    /// Directory lines printed (the root line excluded).
    pub directories: usize,
    /// Non-directory lines printed.
    pub files: usize,
    /// Directories whose contents could not be listed (permission denied).
    pub skipped: Vec<PathBuf>,
}

struct Frame {
    entries: std::vec::IntoIter<Entry>,
    prefix: String,
}

/// Prints a directory tree, omitting entries named in its exclusion set.
#[derive(Debug, Clone, Default)]
pub struct TreePrinter {
    exclusions: ExclusionSet,
}

impl TreePrinter {
    pub fn new(exclusions: ExclusionSet) -> Self {
        Self { exclusions }
    }

    /// Print the root line followed by the whole tree under `root`, then flush `out`.
    pub fn print<W: Write>(&self, root: &Path, out: &mut W) -> Result<RenderSummary, TreeError> {
        writeln!(out, "{}", ROOT_LINE)?;
        let summary = self.render(root, "", out)?;
        out.flush()?;
        Ok(summary)
    }

    /// Print every retained entry below `dir`, each line starting with `prefix`.
    ///
    /// A directory that cannot be listed for lack of permission keeps its own
    /// line but contributes no children; it is recorded in
    /// [`RenderSummary::skipped`]. Other listing failures abort the traversal.
    pub fn render<W: Write>(
        &self,
        dir: &Path,
        prefix: &str,
        out: &mut W,
    ) -> Result<RenderSummary, TreeError> {
        let mut summary = RenderSummary::default();
        let mut stack: Vec<Frame> = Vec::new();
        self.open(dir, prefix.to_string(), &mut stack, &mut summary)?;

        while let Some(frame) = stack.last_mut() {
            let Some(entry) = frame.entries.next() else {
                stack.pop();
                continue;
            };
            let is_last = frame.entries.as_slice().is_empty();
            let connector = if is_last { LAST_BRANCH } else { BRANCH };
            writeln!(out, "{}{}{}", frame.prefix, connector, entry.display_name())?;

            if entry.is_dir {
                summary.directories += 1;
                let segment = if is_last { BLANK } else { CONTINUATION };
                let child_prefix = format!("{}{}", frame.prefix, segment);
                self.open(&entry.path, child_prefix, &mut stack, &mut summary)?;
            } else {
                summary.files += 1;
            }
        }

        Ok(summary)
    }

    fn open(
        &self,
        dir: &Path,
        prefix: String,
        stack: &mut Vec<Frame>,
        summary: &mut RenderSummary,
    ) -> Result<(), TreeError> {
        match list_dir(dir, &self.exclusions)? {
            Listing::Entries(entries) => stack.push(Frame {
                entries: entries.into_iter(),
                prefix,
            }),
            Listing::Denied => {
                log::debug!("Skipping {}: permission denied", dir.display());
                summary.skipped.push(dir.to_path_buf());
            }
        }
        Ok(())
    }
}
