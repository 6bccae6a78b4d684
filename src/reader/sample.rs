//! Per-sample diagnostic reports.
//!
//! Lines are classified in order:
//! - `l=<d> ...` opens (or resets) the bucket for angular degree `d`
//! - seven tokens are one mode row appended to the open bucket
//! - anything else is a `key words ... value` scalar
//!
//! A scalar whose key is exactly six words is read as a mode row.

use crate::constants::{DEGREE_PREFIX, FORTRAN_EXPONENT, MODE_FIELDS, MODE_ROW_TOKENS, degree_label};
use crate::error::{MesaError, Result};
use crate::models::{ModeTable, SampleReport};
use crate::reader::{read_lines, tokenize};
use std::path::Path;
use tracing::{debug, trace};

/// Load a per-sample diagnostic report
pub fn load_sample(path: impl AsRef<Path>) -> Result<SampleReport> {
    let file_path = path.as_ref();
    let lines = read_lines(file_path)?;

    let mut report = SampleReport::new();
    let mut current: Option<String> = None;

    for (index, line) in lines.iter().enumerate() {
        let line_num = index + 1;
        let tokens = tokenize(line, false);
        let Some(first) = tokens.first() else {
            continue;
        };

        if first.starts_with(DEGREE_PREFIX) {
            let degree = parse_degree(file_path, line_num, first)?;
            let label = degree_label(degree);
            trace!("Line {}: opening bucket {}", line_num, label);
            report.degrees.insert(label.clone(), ModeTable::new());
            current = Some(label);
        } else if tokens.len() == MODE_ROW_TOKENS {
            let bucket = current
                .as_ref()
                .and_then(|label| report.degrees.get_mut(label))
                .ok_or_else(|| MesaError::ModeBeforeDegree {
                    path: file_path.to_path_buf(),
                    line: line_num,
                })?;
            let (n, values) = parse_mode_row(file_path, line_num, &tokens)?;
            trace!("Line {}: mode n={}", line_num, n);
            bucket.push(n, values);
        } else {
            let (key, value) = parse_scalar(file_path, line_num, &tokens)?;
            trace!("Line {}: scalar '{}' = {}", line_num, key, value);
            report.scalars.insert(key, value);
        }
    }

    debug!(
        "Loaded sample {}: {} scalars, {} degrees, {} modes",
        file_path.display(),
        report.scalars.len(),
        report.degrees.len(),
        report.mode_count()
    );

    Ok(report)
}

/// Angular degree from the last character of an `l=` token
fn parse_degree(file_path: &Path, line: usize, token: &str) -> Result<u32> {
    token
        .chars()
        .last()
        .and_then(|c| c.to_digit(10))
        .ok_or_else(|| MesaError::InvalidDegree {
            path: file_path.to_path_buf(),
            line,
            token: token.to_string(),
        })
}

fn parse_mode_row(file_path: &Path, line: usize, tokens: &[&str]) -> Result<(i64, [f64; 6])> {
    let invalid = |i: usize, expected: &'static str| MesaError::InvalidValue {
        path: file_path.to_path_buf(),
        line,
        column: MODE_FIELDS[i].to_string(),
        value: tokens[i].to_string(),
        expected,
    };

    let n = tokens[0]
        .parse::<i64>()
        .map_err(|_| invalid(0, "an integer"))?;

    let mut values = [0.0; 6];
    for (offset, value) in values.iter_mut().enumerate() {
        let i = offset + 1;
        *value = tokens[i].parse::<f64>().map_err(|_| invalid(i, "a float"))?;
    }

    Ok((n, values))
}

/// Key of all tokens but the last, value of the last with `D` exponents read as `e`
fn parse_scalar(file_path: &Path, line: usize, tokens: &[&str]) -> Result<(String, f64)> {
    let Some((raw_value, key_words)) = tokens.split_last() else {
        return Err(MesaError::invalid_format(
            file_path,
            format!("line {} has no value", line),
        ));
    };

    let key = key_words.join(" ");
    let value = raw_value
        .replace(FORTRAN_EXPONENT, "e")
        .parse::<f64>()
        .map_err(|_| MesaError::InvalidValue {
            path: file_path.to_path_buf(),
            line,
            column: key.clone(),
            value: raw_value.to_string(),
            expected: "a float",
        })?;

    Ok((key, value))
}
