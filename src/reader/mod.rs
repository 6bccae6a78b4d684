//! Loaders for the MESA output file layouts.
//!
//! Each loader reads its file once into memory, releases the handle, and
//! then slices the fixed line ranges of its layout. Nothing is returned
//! unless the whole file parses.

pub mod history;
pub mod results;
pub mod sample;

#[cfg(test)]
pub mod tests;

pub use history::{LogKind, load_history, load_history_with, load_profile, load_profile_with};
pub use results::{load_results, load_results_with};
pub use sample::load_sample;

use crate::error::Result;
use std::path::Path;
use tracing::debug;

/// Read every line of a file, without line terminators
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Split a line into whitespace-separated tokens
///
/// With `strip_comments`, everything from the first `#` onwards is ignored.
pub fn tokenize(line: &str, strip_comments: bool) -> Vec<&str> {
    let content = if strip_comments {
        line.split_once('#').map_or(line, |(before, _)| before)
    } else {
        line
    };
    content.split_whitespace().collect()
}
