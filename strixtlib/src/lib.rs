//! # strixtlib
//!
//! A byte-level whitespace and formatting style checker for plain-text
//! source files.
//!
//! ## Overview
//!
//! The checker walks files and directories and reports "peeves": style
//! violations tagged with a line and a tab-expanded column. It works on raw
//! bytes with ASCII classification only, so it is language-agnostic and
//! never decodes text.
//!
//! Peeves reported:
//!
//! - **Control bytes**: ASCII controls, DEL, form feeds, carriage returns
//! - **Tabs**: any tab when tabs are disallowed; a tab after non-tab
//!   characters when they are allowed
//! - **Blank lines**: at the start or end of a file, or too many in a row
//! - **Trailing whitespace**: on content lines and on blank lines
//! - **Line length**: rendered width over the limit (79 by default)
//! - **Final newline**: missing at end of file
//!
//! ## Pipeline
//!
//! 1. [`source::walk`] walks roots in pre-order, skipping symlinks and
//!    hidden directories
//! 2. [`source::read`] reads a bounded prefix and sniffs out binary files
//! 3. [`scan::scan`] makes a single pass over the bytes
//!
//! [`check_paths`] runs the whole pipeline, scanning files in parallel.
//!
//! ## Example
//!
//! ```rust
//! use strixtlib::{scan, PeeveKind, ScanOptions};
//!
//! let peeves = scan(b"int x; \n", &ScanOptions::new());
//! assert_eq!(peeves.len(), 1);
//! assert_eq!(peeves[0].kind, PeeveKind::WhitespaceAtEndOfLine);
//! assert_eq!((peeves[0].line, peeves[0].column), (1, 8));
//!
//! let tabs = ScanOptions::new().tabs_allowed(true);
//! assert!(scan(b"\tindented\n", &tabs).is_empty());
//! ```

pub mod check;
pub mod error;
pub mod options;
pub mod peeve;
pub mod scan;
pub mod source;

pub use check::{check_file, check_paths, CheckResult, EntryReport, Outcome};
pub use error::StrixtError;
pub use options::{CheckOptions, ScanOptions, Verbosity};
pub use peeve::{Peeve, PeeveKind};
pub use scan::scan;
pub use source::{FilterConfig, SkipReason};

/// Result type for strixtlib operations
pub type Result<T> = std::result::Result<T, StrixtError>;
