//! History and profile files.
//!
//! Both share one layout: a global header block on lines 2-3 and, from
//! line 6, a column names row followed by numeric data rows. Blank and
//! comment-only lines before the names row are skipped.

use crate::config::LayoutConfig;
use crate::error::{MesaError, Result};
use crate::header::parse_header_block;
use crate::reader::{read_lines, tokenize};
use crate::schema::TableBuilder;
use polars::prelude::DataFrame;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Which log layout is being read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    History,
    Profile,
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogKind::History => write!(f, "history"),
            LogKind::Profile => write!(f, "profile"),
        }
    }
}

/// Load a history file as `(header, data)`
pub fn load_history(path: impl AsRef<Path>) -> Result<(DataFrame, DataFrame)> {
    load_history_with(path, &LayoutConfig::default())
}

/// Load a history file using a custom layout
pub fn load_history_with(
    path: impl AsRef<Path>,
    config: &LayoutConfig,
) -> Result<(DataFrame, DataFrame)> {
    load_log(path.as_ref(), config, LogKind::History)
}

/// Load a profile file as `(header, data)`
pub fn load_profile(path: impl AsRef<Path>) -> Result<(DataFrame, DataFrame)> {
    load_profile_with(path, &LayoutConfig::default())
}

/// Load a profile file using a custom layout
pub fn load_profile_with(
    path: impl AsRef<Path>,
    config: &LayoutConfig,
) -> Result<(DataFrame, DataFrame)> {
    load_log(path.as_ref(), config, LogKind::Profile)
}

fn load_log(
    file_path: &Path,
    config: &LayoutConfig,
    kind: LogKind,
) -> Result<(DataFrame, DataFrame)> {
    config.validate()?;
    let lines = read_lines(file_path)?;

    if lines.len() < config.min_log_lines() {
        return Err(MesaError::invalid_format(
            file_path,
            format!(
                "{} file needs at least {} lines, found {}",
                kind,
                config.min_log_lines(),
                lines.len()
            ),
        ));
    }

    let header = parse_header_block(file_path, &lines, config)?;
    let data = parse_body(file_path, &lines, config)?;

    debug!(
        "Loaded {} {}: {} header fields, {} rows x {} columns",
        kind,
        file_path.display(),
        header.width(),
        data.height(),
        data.width()
    );

    Ok((header, data))
}

fn parse_body(file_path: &Path, lines: &[String], config: &LayoutConfig) -> Result<DataFrame> {
    let (names_line, names) = lines
        .iter()
        .enumerate()
        .skip(config.body_names_line)
        .map(|(index, line)| (index, tokenize(line, config.strip_comments)))
        .find(|(_, tokens)| !tokens.is_empty())
        .ok_or_else(|| {
            MesaError::invalid_format(
                file_path,
                format!(
                    "no column names at or after line {}",
                    config.body_names_line + 1
                ),
            )
        })?;

    let mut builder = TableBuilder::new(file_path, &names);
    for (index, line) in lines.iter().enumerate().skip(names_line + 1) {
        let tokens = tokenize(line, config.strip_comments);
        if tokens.is_empty() {
            continue;
        }
        builder.push_row(index + 1, &tokens)?;
    }

    builder.build(false)
}
