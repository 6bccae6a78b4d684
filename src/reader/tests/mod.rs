//! Test utilities for the MESA loaders
//!
//! Fixture builders writing MESA-shaped files to temporary paths, plus
//! accessors for reading single cells back out of frames.

use polars::prelude::DataFrame;
use std::io::Write;
use tempfile::NamedTempFile;

mod sample_tests;

/// Write `content` to a temporary file kept alive by the returned handle
pub fn write_fixture(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Assemble a history/profile file in MESA's layout
pub fn log_content(
    header_names: &str,
    header_values: &str,
    body_names: &str,
    rows: &[&str],
) -> String {
    let mut content = String::new();
    content.push_str("                                       1                                       2\n");
    content.push_str(header_names);
    content.push('\n');
    content.push_str(header_values);
    content.push('\n');
    content.push('\n');
    content.push_str("       1       2       3\n");
    content.push_str(body_names);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    content
}

/// Number of columns in generated results files
pub const RESULTS_WIDTH: usize = 36;

/// Column names for a generated results file, Fortran-style labels included
pub fn results_names() -> Vec<String> {
    (0..RESULTS_WIDTH)
        .map(|i| match i {
            0 => "model".to_string(),
            31..=34 => format!("count{}", i),
            35 => "Delta_nu".to_string(),
            _ => format!("param{}", i),
        })
        .collect()
}

/// One results data row written with Fortran `D` exponents
pub fn results_row(sample: usize) -> String {
    (0..RESULTS_WIDTH)
        .map(|i| match i {
            0 => sample.to_string(),
            31..=34 => (i - 30).to_string(),
            35 => "1D+01".to_string(),
            _ => format!("{}.5D-01", i),
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// A results file with `rows` samples and the standard 4-line footer
pub fn results_content(rows: usize) -> String {
    let mut content = String::from(" results of search\n");
    content.push_str(&results_names().join("  "));
    content.push('\n');
    for sample in 1..=rows {
        content.push_str(&results_row(sample));
        content.push('\n');
    }
    content.push('\n');
    content.push_str(" best fit sample 1\n");
    content.push_str(" Done search\n");
    content.push_str(" total time 12.5 s\n");
    content
}

pub fn f64_at(df: &DataFrame, column: &str, row: usize) -> Option<f64> {
    df.column(column)
        .unwrap()
        .as_materialized_series()
        .f64()
        .unwrap()
        .get(row)
}

pub fn i64_at(df: &DataFrame, column: &str, row: usize) -> Option<i64> {
    df.column(column)
        .unwrap()
        .as_materialized_series()
        .i64()
        .unwrap()
        .get(row)
}
