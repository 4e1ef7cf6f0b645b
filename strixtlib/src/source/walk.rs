//! Pre-order traversal of the paths to check.
//!
//! The walk never follows symbolic links and never descends into hidden
//! directories, except that a root named explicitly is always entered.
//! Everything skipped is recorded so the caller can report it.

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;
use walkdir::WalkDir;

use super::filter::FilterConfig;
use crate::error::StrixtError;
use crate::Result;

/// Why an entry was not scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    SymbolicLink,
    HiddenDirectory,
    BinaryFile,
    Excluded,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SkipReason::SymbolicLink => "symbolic link",
            SkipReason::HiddenDirectory => "hidden directory",
            SkipReason::BinaryFile => "binary file",
            SkipReason::Excluded => "excluded by pattern",
        })
    }
}

/// One entry produced by the walk, in pre-order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A regular file to read and scan
    File { path: PathBuf, explicit: bool },
    /// Something the walk refused to look into
    Skipped {
        path: PathBuf,
        reason: SkipReason,
        explicit: bool,
    },
}

impl Entry {
    pub fn path(&self) -> &Path {
        match self {
            Entry::File { path, .. } | Entry::Skipped { path, .. } => path,
        }
    }

    /// Whether the entry was named directly rather than found by walking.
    pub fn is_explicit(&self) -> bool {
        match self {
            Entry::File { explicit, .. } | Entry::Skipped { explicit, .. } => *explicit,
        }
    }
}

fn is_hidden(name: &OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}

/// Walk a single root.
///
/// Children are visited in file-name order. A missing root or an unreadable
/// directory aborts the walk.
pub fn walk(root: impl AsRef<Path>, filter: &FilterConfig) -> Result<Vec<Entry>> {
    let root = root.as_ref();

    if root.symlink_metadata().is_err() {
        return Err(StrixtError::PathNotFound(root.to_path_buf()));
    }

    let mut entries = Vec::new();
    let mut walker = WalkDir::new(root)
        .follow_links(false)
        .follow_root_links(false)
        .sort_by_file_name()
        .into_iter();

    while let Some(next) = walker.next() {
        let entry = next.map_err(|e| StrixtError::Walk {
            path: e.path().unwrap_or(root).to_path_buf(),
            source: e,
        })?;
        let explicit = entry.depth() == 0;
        let path = entry.path().to_path_buf();
        let file_type = entry.file_type();

        if file_type.is_symlink() {
            debug!("{}: skipping symbolic link", path.display());
            entries.push(Entry::Skipped {
                path,
                reason: SkipReason::SymbolicLink,
                explicit,
            });
        } else if file_type.is_dir() {
            if !explicit && is_hidden(entry.file_name()) {
                debug!("{}: skipping hidden directory", path.display());
                walker.skip_current_dir();
                entries.push(Entry::Skipped {
                    path,
                    reason: SkipReason::HiddenDirectory,
                    explicit,
                });
            }
        } else if !filter.matches(&path) {
            entries.push(Entry::Skipped {
                path,
                reason: SkipReason::Excluded,
                explicit,
            });
        } else {
            entries.push(Entry::File { path, explicit });
        }
    }

    Ok(entries)
}

/// Walk several roots in the order given.
pub fn walk_all<P: AsRef<Path>>(roots: &[P], filter: &FilterConfig) -> Result<Vec<Entry>> {
    let mut all = Vec::new();
    for root in roots {
        all.extend(walk(root, filter)?);
    }
    Ok(all)
}
