//! Input options for scanning and checking.
//!
//! This module contains all configuration types that control what the
//! scanner reports and how a check run walks and reads files. Options are
//! plain values passed into each call; there is no global state.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::source::filter::FilterConfig;

/// Tab stop used when expanding tabs to human columns.
pub const TAB_WIDTH: usize = 8;

/// Default cap on bytes read from one file.
pub const DEFAULT_MAX_FILE_SIZE: usize = 64 * 1024;

/// Default number of peeves printed per file before truncating.
pub const DEFAULT_MAX_SHOWN_PEEVES: usize = 10;

/// Options consumed by the byte scanner itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOptions {
    /// Allow tab characters (leading tabs only)
    pub tabs_allowed: bool,
    /// Longest rendered line width that is not reported
    pub max_line_width: usize,
    /// Longest run of blank lines that is not reported
    pub max_blank_lines: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            tabs_allowed: false,
            max_line_width: 79,
            max_blank_lines: 2,
        }
    }
}

impl ScanOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: allow or disallow tabs.
    pub fn tabs_allowed(mut self, allowed: bool) -> Self {
        self.tabs_allowed = allowed;
        self
    }

    /// Builder: set the maximum rendered line width.
    pub fn max_line_width(mut self, width: usize) -> Self {
        self.max_line_width = width;
        self
    }

    /// Builder: set the maximum run of blank lines.
    pub fn max_blank_lines(mut self, count: usize) -> Self {
        self.max_blank_lines = count;
        self
    }
}

/// How much the checker reports beyond peeves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Peeves only
    Quiet,
    /// Peeves, plus skips of paths named explicitly
    #[default]
    Info,
    /// Everything, including every skipped entry and clean files
    Verbose,
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Verbosity::Quiet),
            "info" => Ok(Verbosity::Info),
            "verbose" => Ok(Verbosity::Verbose),
            _ => Err(format!("unknown verbosity: {s}")),
        }
    }
}

/// Options for a check run over files and directories.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Scanner options shared by every file
    pub scan: ScanOptions,
    /// Bytes read per file; anything past this is not scanned
    pub max_file_size: usize,
    /// Peeves shown per file before a truncation notice
    pub max_shown_peeves: usize,
    /// Reporting level
    pub verbosity: Verbosity,
    /// Path filter
    pub filter: FilterConfig,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            scan: ScanOptions::default(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_shown_peeves: DEFAULT_MAX_SHOWN_PEEVES,
            verbosity: Verbosity::default(),
            filter: FilterConfig::new(),
        }
    }
}

impl CheckOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set scanner options.
    pub fn scan(mut self, scan: ScanOptions) -> Self {
        self.scan = scan;
        self
    }

    /// Set the per-file read cap.
    pub fn max_file_size(mut self, bytes: usize) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Set how many peeves are shown per file.
    pub fn max_shown_peeves(mut self, count: usize) -> Self {
        self.max_shown_peeves = count;
        self
    }

    /// Set verbosity.
    pub fn verbosity(mut self, level: Verbosity) -> Self {
        self.verbosity = level;
        self
    }

    /// Set path filter.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_options_defaults() {
        let opts = ScanOptions::new();
        assert!(!opts.tabs_allowed);
        assert_eq!(opts.max_line_width, 79);
        assert_eq!(opts.max_blank_lines, 2);
    }

    #[test]
    fn scan_options_builder() {
        let opts = ScanOptions::new()
            .tabs_allowed(true)
            .max_line_width(100)
            .max_blank_lines(1);
        assert!(opts.tabs_allowed);
        assert_eq!(opts.max_line_width, 100);
        assert_eq!(opts.max_blank_lines, 1);
    }

    #[test]
    fn check_options_defaults() {
        let opts = CheckOptions::new();
        assert_eq!(opts.max_file_size, 65536);
        assert_eq!(opts.max_shown_peeves, DEFAULT_MAX_SHOWN_PEEVES);
        assert_eq!(opts.verbosity, Verbosity::Info);
    }

    #[test]
    fn verbosity_ordering() {
        assert!(Verbosity::Quiet < Verbosity::Info);
        assert!(Verbosity::Info < Verbosity::Verbose);
    }

    #[test]
    fn verbosity_from_str() {
        assert_eq!("VERBOSE".parse::<Verbosity>(), Ok(Verbosity::Verbose));
        assert_eq!("quiet".parse::<Verbosity>(), Ok(Verbosity::Quiet));
        assert!("loud".parse::<Verbosity>().is_err());
    }
}
