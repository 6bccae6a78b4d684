//! Astero optimisation results tables.
//!
//! Values are written with Fortran `D` exponents, so every `D` in the file
//! becomes `E` before anything is parsed, column names included. The table
//! schema comes from line 2 with fixed overrides: column 0 is the integer
//! `sample` index and the four per-degree mode counts are integers named
//! `nl0`..`nl3`. The last lines of the file are a footer and never data.

use crate::config::LayoutConfig;
use crate::constants::{
    FORTRAN_EXPONENT, RESULTS_MODE_COUNT_COLUMNS, RESULTS_SAMPLE_COLUMN, mode_count_column,
};
use crate::error::{MesaError, Result};
use crate::models::ColumnKind;
use crate::reader::{read_lines, tokenize};
use crate::schema::TableBuilder;
use polars::prelude::DataFrame;
use std::path::Path;
use tracing::{debug, warn};

/// Load an optimisation results file
pub fn load_results(path: impl AsRef<Path>) -> Result<DataFrame> {
    load_results_with(path, &LayoutConfig::default())
}

/// Load an optimisation results file using a custom layout
pub fn load_results_with(path: impl AsRef<Path>, config: &LayoutConfig) -> Result<DataFrame> {
    let file_path = path.as_ref();
    config.validate()?;

    let lines: Vec<String> = read_lines(file_path)?
        .into_iter()
        .map(|line| line.replace(FORTRAN_EXPONENT, "E"))
        .collect();

    let (names, kinds) = results_schema(file_path, &lines, config)?;

    let body_end = lines
        .len()
        .checked_sub(config.results_footer_lines)
        .filter(|end| *end >= config.results_body_start)
        .ok_or_else(|| {
            MesaError::invalid_format(
                file_path,
                format!(
                    "{} lines cannot hold data from line {} plus a {}-line footer",
                    lines.len(),
                    config.results_body_start + 1,
                    config.results_footer_lines
                ),
            )
        })?;

    let width = names.len();
    let mut builder = TableBuilder::new(file_path, &names);
    let mut truncated_rows = 0;

    for (index, line) in lines
        .iter()
        .enumerate()
        .take(body_end)
        .skip(config.results_body_start)
    {
        let tokens = tokenize(line, config.strip_comments);
        if tokens.is_empty() {
            continue;
        }
        if tokens.len() > width {
            truncated_rows += 1;
        }
        let row = &tokens[..tokens.len().min(width)];
        builder.push_row(index + 1, row)?;
    }

    if truncated_rows > 0 {
        warn!(
            "Ignored trailing values beyond {} columns on {} rows of {}",
            width,
            truncated_rows,
            file_path.display()
        );
    }

    let data = builder.build_with_kinds(&kinds)?;

    debug!(
        "Loaded results {}: {} samples x {} columns",
        file_path.display(),
        data.height(),
        data.width()
    );

    Ok(data)
}

/// Column names and types for a results file
fn results_schema(
    file_path: &Path,
    lines: &[String],
    config: &LayoutConfig,
) -> Result<(Vec<String>, Vec<ColumnKind>)> {
    let schema_line = lines.get(config.results_schema_line).ok_or_else(|| {
        MesaError::invalid_format(
            file_path,
            format!(
                "missing column names on line {}",
                config.results_schema_line + 1
            ),
        )
    })?;

    let mut names: Vec<String> = tokenize(schema_line, config.strip_comments)
        .into_iter()
        .map(str::to_string)
        .collect();

    let counts_start = config.results_mode_count_start;
    let min_width = config.results_mode_count_end();
    if names.len() < min_width {
        return Err(MesaError::invalid_format(
            file_path,
            format!(
                "results schema names {} columns, at least {} required",
                names.len(),
                min_width
            ),
        ));
    }

    let mut kinds = vec![ColumnKind::Float; names.len()];

    names[0] = RESULTS_SAMPLE_COLUMN.to_string();
    kinds[0] = ColumnKind::Integer;

    for degree in 0..RESULTS_MODE_COUNT_COLUMNS {
        names[counts_start + degree] = mode_count_column(degree);
        kinds[counts_start + degree] = ColumnKind::Integer;
    }

    Ok((names, kinds))
}
