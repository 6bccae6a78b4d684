//! Error handling for MESA output readers.
//!
//! I/O failures are passed through untouched; everything else describes a
//! file that exists but does not follow the fixed positional layout its
//! loader expects.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MesaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Invalid layout in file: {path} - {reason}")]
    InvalidFormat { path: PathBuf, reason: String },

    #[error(
        "Column count mismatch in file {path} at line {line}: expected {expected} columns, found {found}"
    )]
    ColumnCountMismatch {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error(
        "Invalid value in file {path} at line {line}: column '{column}' holds '{value}', expected {expected}"
    )]
    InvalidValue {
        path: PathBuf,
        line: usize,
        column: String,
        value: String,
        expected: &'static str,
    },

    #[error("Invalid angular degree '{token}' in file {path} at line {line}")]
    InvalidDegree {
        path: PathBuf,
        line: usize,
        token: String,
    },

    #[error("Mode row before any angular degree header in file {path} at line {line}")]
    ModeBeforeDegree { path: PathBuf, line: usize },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl MesaError {
    /// True for errors raised because file contents broke the expected layout
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            MesaError::InvalidFormat { .. }
                | MesaError::ColumnCountMismatch { .. }
                | MesaError::InvalidValue { .. }
                | MesaError::InvalidDegree { .. }
                | MesaError::ModeBeforeDegree { .. }
        )
    }

    pub(crate) fn invalid_format(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        MesaError::InvalidFormat {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MesaError>;
