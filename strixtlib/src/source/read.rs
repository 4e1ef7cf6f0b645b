//! Bounded file reading and the binary sniff.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use log::debug;

/// How many leading bytes are inspected when deciding if a file is binary.
pub const BINARY_SNIFF_LEN: usize = 100;

fn try_read(path: &Path, limit: usize) -> io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut buf = Vec::with_capacity(limit.min(8 * 1024));
    file.take(limit as u64).read_to_end(&mut buf)?;
    Ok(buf)
}

/// Read at most `limit` bytes from the start of a file.
///
/// Open and read failures yield an empty buffer; the handle is closed on
/// every path.
pub fn read_capped(path: impl AsRef<Path>, limit: usize) -> Vec<u8> {
    let path = path.as_ref();
    match try_read(path, limit) {
        Ok(buf) => buf,
        Err(e) => {
            debug!("{}: read failed, treating as empty: {e}", path.display());
            Vec::new()
        }
    }
}

/// A buffer looks binary if its first [`BINARY_SNIFF_LEN`] bytes hold a NUL.
pub fn looks_binary(bytes: &[u8]) -> bool {
    bytes.iter().take(BINARY_SNIFF_LEN).any(|&b| b == 0)
}

/// Sniff a file on disk.
pub fn is_binary_file(path: impl AsRef<Path>) -> bool {
    looks_binary(&read_capped(path, BINARY_SNIFF_LEN))
}
