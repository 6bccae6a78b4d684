//! Configuration of the positional layouts read by the loaders.
//!
//! The defaults describe files written by MESA itself. Callers reading
//! post-processed or hand-trimmed files can shift the line offsets.

use crate::constants::{
    BODY_NAMES_LINE, HEADER_NAMES_LINE, RESULTS_BODY_START, RESULTS_FOOTER_LINES,
    RESULTS_MODE_COUNT_COLUMNS, RESULTS_MODE_COUNT_START, RESULTS_SCHEMA_LINE,
};
use crate::error::{MesaError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Line layout used by the history, profile and results loaders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Line of the header names; the header values are on the next line
    pub header_names_line: usize,

    /// Line of the body column names in history and profile files
    pub body_names_line: usize,

    /// Line of the results column names
    pub results_schema_line: usize,

    /// First line of results data
    pub results_body_start: usize,

    /// Trailing lines excluded from the results body
    pub results_footer_lines: usize,

    /// Position of the `nl0` column in the results schema
    pub results_mode_count_start: usize,

    /// Drop text after `#` in table bodies
    pub strip_comments: bool,

    /// Keep non-numeric header values as text columns instead of failing
    pub allow_text_header: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            header_names_line: HEADER_NAMES_LINE,
            body_names_line: BODY_NAMES_LINE,
            results_schema_line: RESULTS_SCHEMA_LINE,
            results_body_start: RESULTS_BODY_START,
            results_footer_lines: RESULTS_FOOTER_LINES,
            results_mode_count_start: RESULTS_MODE_COUNT_START,
            strip_comments: true,
            allow_text_header: true,
        }
    }
}

impl LayoutConfig {
    /// Line of the header values
    pub fn header_values_line(&self) -> usize {
        self.header_names_line.saturating_add(1)
    }

    /// Minimum number of lines a history or profile file must have
    pub fn min_log_lines(&self) -> usize {
        self.body_names_line.saturating_add(1)
    }

    /// Position one past the `nl3` column
    pub fn results_mode_count_end(&self) -> usize {
        self.results_mode_count_start.saturating_add(RESULTS_MODE_COUNT_COLUMNS)
    }

    /// Create configuration with a custom body names line
    pub fn with_body_names_line(mut self, line: usize) -> Self {
        self.body_names_line = line;
        self
    }

    /// Create configuration with a custom header names line
    pub fn with_header_names_line(mut self, line: usize) -> Self {
        self.header_names_line = line;
        self
    }

    /// Create configuration with a custom results footer length
    pub fn with_results_footer_lines(mut self, lines: usize) -> Self {
        self.results_footer_lines = lines;
        self
    }

    /// Treat every header field as numeric
    pub fn with_strict_header(mut self) -> Self {
        self.allow_text_header = false;
        self
    }

    /// Keep `#` characters as ordinary token text
    pub fn without_comment_stripping(mut self) -> Self {
        self.strip_comments = false;
        self
    }

    /// Check that the offsets describe a readable layout
    pub fn validate(&self) -> Result<()> {
        let offsets = [
            ("header_names_line", self.header_names_line, 1),
            ("body_names_line", self.body_names_line, 1),
            ("results_body_start", self.results_body_start, 1),
            (
                "results_mode_count_start",
                self.results_mode_count_start,
                RESULTS_MODE_COUNT_COLUMNS,
            ),
        ];
        for (field, value, span) in offsets {
            if value.checked_add(span).is_none() {
                return Err(MesaError::Configuration {
                    message: format!("{} {} is out of range", field, value),
                });
            }
        }

        if self.body_names_line <= self.header_values_line() {
            return Err(MesaError::Configuration {
                message: format!(
                    "body names line {} must come after header values line {}",
                    self.body_names_line,
                    self.header_values_line()
                ),
            });
        }

        if self.results_body_start <= self.results_schema_line {
            return Err(MesaError::Configuration {
                message: format!(
                    "results body start {} must come after schema line {}",
                    self.results_body_start, self.results_schema_line
                ),
            });
        }

        if self.results_mode_count_start == 0 {
            return Err(MesaError::Configuration {
                message: "results mode count columns cannot replace the sample column".to_string(),
            });
        }

        debug!("Layout configuration validated: {:?}", self);
        Ok(())
    }
}
