//! MESA Reader Library
//!
//! Reads the fixed-layout text files written by the MESA stellar evolution
//! code into polars `DataFrame`s.
//!
//! This library provides loaders for:
//! - History logs and profiles, as a single-row header frame plus a data frame
//! - Astero optimisation results, one row per trial sample
//! - Per-sample diagnostic reports, grouped by angular degree
//!
//! Column types are inferred per column: integer when every value is a
//! plain integer, floating point otherwise.

pub mod config;
pub mod constants;
pub mod error;
pub mod header;
pub mod models;
pub mod reader;
pub mod schema;

pub use config::LayoutConfig;
pub use error::{MesaError, Result};
pub use models::{ColumnKind, ModeTable, SampleReport};
pub use reader::{
    LogKind, load_history, load_history_with, load_profile, load_profile_with, load_results,
    load_results_with, load_sample,
};
