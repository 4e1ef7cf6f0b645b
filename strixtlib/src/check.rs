//! High-level checking API.
//!
//! This module ties traversal, reading and scanning together. Files are
//! scanned in parallel; results come back in traversal order.

use std::path::{Path, PathBuf};

use log::{debug, trace};
use rayon::prelude::*;
use serde::Serialize;

use crate::options::{CheckOptions, Verbosity};
use crate::peeve::Peeve;
use crate::scan::scan;
use crate::source::read::{looks_binary, read_capped, BINARY_SNIFF_LEN};
use crate::source::walk::{walk_all, Entry, SkipReason};
use crate::Result;

/// What happened to one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The entry was not scanned
    Skipped { reason: SkipReason },
    /// The file was scanned; `peeves` may be empty
    Checked { peeves: Vec<Peeve> },
}

/// Result for one walked entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryReport {
    pub path: PathBuf,
    /// Named directly on the command line
    pub explicit: bool,
    pub outcome: Outcome,
}

impl EntryReport {
    /// Peeves found in this entry (empty for skipped entries).
    pub fn peeves(&self) -> &[Peeve] {
        match &self.outcome {
            Outcome::Checked { peeves } => peeves,
            Outcome::Skipped { .. } => &[],
        }
    }

    /// Whether this entry produces output at the given verbosity.
    ///
    /// Peeves are always reported. Skips are reported for explicit paths
    /// unless quiet, and for everything when verbose. Clean files only when
    /// verbose.
    pub fn is_reported(&self, verbosity: Verbosity) -> bool {
        match &self.outcome {
            Outcome::Checked { peeves } if !peeves.is_empty() => true,
            Outcome::Checked { .. } => verbosity >= Verbosity::Verbose,
            Outcome::Skipped { .. } => {
                verbosity >= Verbosity::Verbose
                    || (self.explicit && verbosity >= Verbosity::Info)
            }
        }
    }
}

/// Result of checking a set of paths.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckResult {
    /// Every walked entry, in traversal order
    pub entries: Vec<EntryReport>,
}

impl CheckResult {
    /// Create a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of files actually scanned.
    pub fn files_checked(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, Outcome::Checked { .. }))
            .count()
    }

    /// Total peeves across all files.
    pub fn peeve_count(&self) -> usize {
        self.entries.iter().map(|e| e.peeves().len()).sum()
    }

    /// Whether any file had a peeve.
    pub fn has_peeves(&self) -> bool {
        self.entries.iter().any(|e| !e.peeves().is_empty())
    }
}

/// Read, sniff and scan one file.
///
/// At most `max_file_size` bytes are scanned; anything past that is
/// ignored.
pub fn check_file(path: impl AsRef<Path>, options: &CheckOptions) -> Outcome {
    let path = path.as_ref();
    let limit = options.max_file_size.max(BINARY_SNIFF_LEN);
    let bytes = read_capped(path, limit);

    if looks_binary(&bytes) {
        debug!("{}: skipping binary file", path.display());
        return Outcome::Skipped {
            reason: SkipReason::BinaryFile,
        };
    }

    let scanned = &bytes[..bytes.len().min(options.max_file_size)];
    trace!("{}: scanning {} bytes", path.display(), scanned.len());
    Outcome::Checked {
        peeves: scan(scanned, &options.scan),
    }
}

/// Walk and check files and directories.
///
/// This is the main entry point. It:
/// 1. Walks every root in order, skipping symlinks and hidden directories
/// 2. Applies the glob filter to files
/// 3. Reads, sniffs and scans each file in parallel
///
/// A missing root or an unreadable directory fails the whole run.
///
/// # Example
///
/// ```rust,ignore
/// use strixtlib::{check_paths, CheckOptions, ScanOptions};
///
/// let options = CheckOptions::new().scan(ScanOptions::new().tabs_allowed(true));
/// let result = check_paths(&["."], &options)?;
/// for entry in &result.entries {
///     for peeve in entry.peeves() {
///         println!("{}:{}:{}: {}", entry.path.display(), peeve.line, peeve.column, peeve.kind);
///     }
/// }
/// ```
pub fn check_paths<P: AsRef<Path>>(roots: &[P], options: &CheckOptions) -> Result<CheckResult> {
    let entries = walk_all(roots, &options.filter)?;
    debug!("walked {} entries", entries.len());

    let entries = entries
        .into_par_iter()
        .map(|entry| match entry {
            Entry::File { path, explicit } => {
                let outcome = check_file(&path, options);
                EntryReport {
                    path,
                    explicit,
                    outcome,
                }
            }
            Entry::Skipped {
                path,
                reason,
                explicit,
            } => EntryReport {
                path,
                explicit,
                outcome: Outcome::Skipped { reason },
            },
        })
        .collect();

    Ok(CheckResult { entries })
}
