//! Layout constants for MESA output files
//!
//! Line positions are 0-indexed offsets into the file's lines.

// =============================================================================
// History and Profile Files
// =============================================================================

/// Line holding the names of the global header fields; values follow on the next line
pub const HEADER_NAMES_LINE: usize = 1;

/// Line holding the body column names; data rows follow it
pub const BODY_NAMES_LINE: usize = 5;

// =============================================================================
// Astero Optimisation Results
// =============================================================================

/// Line holding the results column names
pub const RESULTS_SCHEMA_LINE: usize = 1;

/// First line of results data
pub const RESULTS_BODY_START: usize = 2;

/// Number of trailing non-data lines after the results table
pub const RESULTS_FOOTER_LINES: usize = 4;

/// Name given to results column 0
pub const RESULTS_SAMPLE_COLUMN: &str = "sample";

/// Position of the first per-degree mode count column (`nl0`)
pub const RESULTS_MODE_COUNT_START: usize = 31;

/// Number of per-degree mode count columns (`nl0`..`nl3`)
pub const RESULTS_MODE_COUNT_COLUMNS: usize = 4;

/// Fortran double-precision exponent marker
pub const FORTRAN_EXPONENT: char = 'D';

// =============================================================================
// Per-Sample Diagnostics
// =============================================================================

/// Prefix of a line opening an angular-degree bucket
pub const DEGREE_PREFIX: &str = "l=";

/// Token count of a mode observation row
pub const MODE_ROW_TOKENS: usize = 7;

/// Fields of a mode observation row, in file order
pub const MODE_FIELDS: [&str; MODE_ROW_TOKENS] = ["n", "chi2", "mdl", "cor", "obs", "err", "logE"];

/// Bucket label for an angular degree (`l0`, `l1`, ...)
pub fn degree_label(degree: u32) -> String {
    format!("l{}", degree)
}

/// Results column name for the mode count of a degree (`nl0`, `nl1`, ...)
pub fn mode_count_column(degree: usize) -> String {
    format!("nl{}", degree)
}
