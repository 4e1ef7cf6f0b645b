//! Byte-level style scanning.
//!
//! This is the core of the checker: a pure function from a byte buffer and
//! [`ScanOptions`](crate::options::ScanOptions) to an ordered list of
//! [`Peeve`](crate::peeve::Peeve)s. It performs no I/O.
//!
//! - [`byte_class`]: classify one byte
//! - [`line`]: leading-whitespace partition and tab-expanded columns
//! - [`scanner`]: the single forward pass

pub mod byte_class;
pub mod line;
pub mod scanner;

pub use byte_class::ByteClass;
pub use line::{tab_advance, LineState, TabPlacement};
pub use scanner::scan;
