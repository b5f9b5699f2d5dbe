//! The "recent carriers" convenience list: a flat text file, one path per
//! line, capped at a small fixed capacity. This is an external collaborator
//! to the steganography core — it never touches the bitmap, Huffman, or
//! envelope modules, and a failure to read or write it is never fatal to
//! `encode`/`decode`.
//!
//! FIFO eviction mirrors the bounded queue the original program kept for
//! the same purpose: once the list is full, recording a new entry drops
//! the oldest one.

use std::fs;
use std::path::Path;

/// Maximum number of paths retained in the recent-files list.
pub const RECENT_FILES_CAPACITY: usize = 10;

/// Load the recent-files list, most-recently-recorded last. A missing file
/// is treated as an empty list, not an error — there is nothing to be
/// recent about on first use.
pub fn load<P: AsRef<Path>>(path: P) -> Vec<String> {
    match fs::read_to_string(path.as_ref()) {
        Ok(contents) => contents.lines().map(str::to_string).collect(),
        Err(e) => {
            log::debug!("no recent-files list at {}: {e}", path.as_ref().display());
            Vec::new()
        }
    }
}

/// Append `entry` to the recent-files list, dropping the oldest entry if
/// the list would otherwise exceed `RECENT_FILES_CAPACITY`, then persist
/// it. A duplicate of the most recent entry is not re-recorded.
pub fn record<P: AsRef<Path>>(path: P, entry: &str) -> std::io::Result<()> {
    let mut entries = load(path.as_ref());
    if entries.last().map(String::as_str) == Some(entry) {
        return Ok(());
    }
    entries.push(entry.to_string());
    while entries.len() > RECENT_FILES_CAPACITY {
        entries.remove(0);
    }
    fs::write(path.as_ref(), entries.join("\n") + "\n")
}
