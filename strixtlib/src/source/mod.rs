//! Source discovery: find and read the files to check.
//!
//! This module handles everything before scanning:
//!
//! - **Traversal**: pre-order walk that skips symbolic links and hidden
//!   directories
//! - **File filtering**: include/exclude files with glob patterns
//! - **Reading**: bounded reads and the binary-file sniff
//!
//! ## Example
//!
//! ```rust,ignore
//! use strixtlib::source::{walk, FilterConfig};
//!
//! let filter = FilterConfig::new().exclude("**/vendor/**")?;
//! let entries = walk(".", &filter)?;
//! ```

pub mod filter;
pub mod read;
pub mod walk;

pub use filter::FilterConfig;
pub use read::{is_binary_file, looks_binary, read_capped, BINARY_SNIFF_LEN};
pub use walk::{walk, walk_all, Entry, SkipReason};
