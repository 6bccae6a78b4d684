//! Global header block of history and profile files.
//!
//! The header is a names row immediately followed by a values row. It
//! becomes a single-row frame keyed by the names, each field typed on its
//! own value.
//!
//! By default a value that is neither integer nor float (MESA writes
//! quoted version and date strings here) becomes a `String` column with
//! the quotes removed. `LayoutConfig::with_strict_header` rejects such
//! values instead.

use crate::config::LayoutConfig;
use crate::error::{MesaError, Result};
use crate::reader::tokenize;
use crate::schema::TableBuilder;
use polars::prelude::DataFrame;
use std::path::Path;
use tracing::debug;

/// Parse the header names/values pair of an already-read file
pub fn parse_header_block(
    file_path: &Path,
    lines: &[String],
    config: &LayoutConfig,
) -> Result<DataFrame> {
    let names_line = config.header_names_line;
    let values_line = config.header_values_line();

    let (Some(names), Some(values)) = (lines.get(names_line), lines.get(values_line)) else {
        return Err(MesaError::invalid_format(
            file_path,
            format!(
                "header needs lines {} and {}, file has {} lines",
                names_line + 1,
                values_line + 1,
                lines.len()
            ),
        ));
    };

    let names = tokenize(names, config.strip_comments);
    if names.is_empty() {
        return Err(MesaError::invalid_format(
            file_path,
            format!("header names line {} is empty", names_line + 1),
        ));
    }

    let mut builder = TableBuilder::new(file_path, &names);
    builder.push_row(values_line + 1, &tokenize(values, config.strip_comments))?;
    let header = builder.build(config.allow_text_header)?;

    debug!(
        "Parsed header for {}: {} fields",
        file_path.display(),
        header.width()
    );

    Ok(header)
}
