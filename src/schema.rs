//! Column typing and table assembly.
//!
//! Tables are built in two passes: tokens are first collected per column as
//! text, then each column is typed as a whole and materialised into a
//! polars `Column`. Integer columns hold only sign-and-digit tokens; any
//! decimal point or exponent makes the column floating point, as does an
//! integer too large for `i64`.

use crate::error::{MesaError, Result};
use crate::models::ColumnKind;
use polars::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// True when `token` is an optionally signed run of digits fitting in `i64`
pub fn is_integer_token(token: &str) -> bool {
    token.parse::<i64>().is_ok()
}

/// Narrowest kind able to hold every value of a column
pub fn infer_column_kind<S: AsRef<str>>(values: &[S]) -> ColumnKind {
    if values.iter().all(|v| is_integer_token(v.as_ref())) {
        ColumnKind::Integer
    } else if values.iter().all(|v| v.as_ref().parse::<f64>().is_ok()) {
        ColumnKind::Float
    } else {
        ColumnKind::Text
    }
}

/// Disambiguate repeated column names by appending `_1`, `_2`, ...
pub fn unique_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut result = Vec::with_capacity(names.len());

    for name in names {
        let base = name.as_ref();
        let mut candidate = base.to_string();
        let mut suffix = 0;
        while seen.contains(&candidate) {
            suffix += 1;
            candidate = format!("{}_{}", base, suffix);
        }
        seen.insert(candidate.clone());
        result.push(candidate);
    }

    result
}

/// Convert one column of tokens into a polars column of the given kind
///
/// `lines` gives the 1-indexed source line of each value for error reports.
pub fn typed_column(
    path: &Path,
    name: &str,
    kind: ColumnKind,
    values: &[String],
    lines: &[usize],
) -> Result<Column> {
    let invalid = |i: usize| MesaError::InvalidValue {
        path: path.to_path_buf(),
        line: lines.get(i).copied().unwrap_or(0),
        column: name.to_string(),
        value: values[i].clone(),
        expected: kind.expected(),
    };

    let column = match kind {
        ColumnKind::Integer => {
            let parsed = values
                .iter()
                .enumerate()
                .map(|(i, v)| v.parse::<i64>().map_err(|_| invalid(i)))
                .collect::<Result<Vec<i64>>>()?;
            Column::new(name.into(), parsed)
        }
        ColumnKind::Float => {
            let parsed = values
                .iter()
                .enumerate()
                .map(|(i, v)| v.parse::<f64>().map_err(|_| invalid(i)))
                .collect::<Result<Vec<f64>>>()?;
            Column::new(name.into(), parsed)
        }
        ColumnKind::Text => {
            let text: Vec<&str> = values.iter().map(|v| v.trim_matches('"')).collect();
            Column::new(name.into(), text)
        }
    };

    Ok(column)
}

/// Row-oriented collector producing a typed `DataFrame`
#[derive(Debug)]
pub struct TableBuilder {
    path: PathBuf,
    names: Vec<String>,
    columns: Vec<Vec<String>>,
    lines: Vec<usize>,
}

impl TableBuilder {
    /// Start a table with the given column names (deduplicated)
    pub fn new<S: AsRef<str>>(path: &Path, names: &[S]) -> Self {
        let names = unique_names(names);
        let columns = vec![Vec::new(); names.len()];
        Self {
            path: path.to_path_buf(),
            names,
            columns,
            lines: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.names.len()
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Append a row; `line` is the 1-indexed source line
    pub fn push_row<S: AsRef<str>>(&mut self, line: usize, tokens: &[S]) -> Result<()> {
        if tokens.len() != self.names.len() {
            return Err(MesaError::ColumnCountMismatch {
                path: self.path.clone(),
                line,
                expected: self.names.len(),
                found: tokens.len(),
            });
        }

        for (column, token) in self.columns.iter_mut().zip(tokens) {
            column.push(token.as_ref().to_string());
        }
        self.lines.push(line);
        Ok(())
    }

    /// Type every column from its values and assemble the frame
    ///
    /// Columns that are neither integer nor float fail unless `allow_text`.
    pub fn build(self, allow_text: bool) -> Result<DataFrame> {
        let mut columns = Vec::with_capacity(self.names.len());

        for (name, values) in self.names.iter().zip(&self.columns) {
            let mut kind = infer_column_kind(values);
            if kind == ColumnKind::Text && !allow_text {
                // Re-parse as float so the error names the first bad token
                kind = ColumnKind::Float;
            }
            columns.push(typed_column(&self.path, name, kind, values, &self.lines)?);
        }

        debug!(
            "Built table from {}: {} rows x {} columns",
            self.path.display(),
            self.lines.len(),
            columns.len()
        );

        Ok(DataFrame::new(columns)?)
    }

    /// Assemble the frame using a fixed kind per column
    pub fn build_with_kinds(self, kinds: &[ColumnKind]) -> Result<DataFrame> {
        if kinds.len() != self.names.len() {
            return Err(MesaError::invalid_format(
                &self.path,
                format!(
                    "schema declares {} column types for {} columns",
                    kinds.len(),
                    self.names.len()
                ),
            ));
        }

        let columns = self
            .names
            .iter()
            .zip(&self.columns)
            .zip(kinds)
            .map(|((name, values), kind)| {
                typed_column(&self.path, name, *kind, values, &self.lines)
            })
            .collect::<Result<Vec<Column>>>()?;

        Ok(DataFrame::new(columns)?)
    }
}
