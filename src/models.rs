//! Core data structures returned by the loaders.
//!
//! Tabular results are plain polars `DataFrame`s; this module holds the
//! column typing used to build them and the nested per-sample report.

use crate::constants::{MODE_FIELDS, degree_label};
use crate::error::Result;
use polars::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Storage type chosen for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Float,
    Text,
}

impl ColumnKind {
    /// Description used in coercion errors
    pub fn expected(&self) -> &'static str {
        match self {
            ColumnKind::Integer => "an integer",
            ColumnKind::Float => "a float",
            ColumnKind::Text => "text",
        }
    }
}

/// Observed oscillation modes for one angular degree
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[allow(non_snake_case)]
pub struct ModeTable {
    pub n: Vec<i64>,
    pub chi2: Vec<f64>,
    pub mdl: Vec<f64>,
    pub cor: Vec<f64>,
    pub obs: Vec<f64>,
    pub err: Vec<f64>,
    pub logE: Vec<f64>,
}

impl ModeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of modes recorded
    pub fn len(&self) -> usize {
        self.n.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n.is_empty()
    }

    pub(crate) fn push(&mut self, n: i64, values: [f64; 6]) {
        let [chi2, mdl, cor, obs, err, log_e] = values;
        self.n.push(n);
        self.chi2.push(chi2);
        self.mdl.push(mdl);
        self.cor.push(cor);
        self.obs.push(obs);
        self.err.push(err);
        self.logE.push(log_e);
    }

    /// Convert to a frame with one column per mode field
    pub fn to_frame(&self) -> Result<DataFrame> {
        let [n, chi2, mdl, cor, obs, err, log_e] = MODE_FIELDS;
        let df = DataFrame::new(vec![
            Column::new(n.into(), &self.n),
            Column::new(chi2.into(), &self.chi2),
            Column::new(mdl.into(), &self.mdl),
            Column::new(cor.into(), &self.cor),
            Column::new(obs.into(), &self.obs),
            Column::new(err.into(), &self.err),
            Column::new(log_e.into(), &self.logE),
        ])?;
        Ok(df)
    }
}

/// Contents of a per-sample diagnostic report
///
/// Serialises to a single flat mapping: scalar entries and `l<degree>`
/// buckets side by side.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SampleReport {
    #[serde(flatten)]
    pub scalars: BTreeMap<String, f64>,
    #[serde(flatten)]
    pub degrees: BTreeMap<String, ModeTable>,
}

impl SampleReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scalar value stored under `key`
    pub fn get(&self, key: &str) -> Option<f64> {
        self.scalars.get(key).copied()
    }

    /// Modes recorded for angular degree `degree`
    pub fn degree(&self, degree: u32) -> Option<&ModeTable> {
        self.degrees.get(&degree_label(degree))
    }

    /// Total modes across all degrees
    pub fn mode_count(&self) -> usize {
        self.degrees.values().map(ModeTable::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_table_push_keeps_sequences_parallel() {
        let mut table = ModeTable::new();
        assert!(table.is_empty());

        table.push(14, [0.5, 1500.1, -2.3, 1497.8, 0.2, -6.1]);
        table.push(15, [1.5, 1600.0, -2.5, 1597.4, 0.3, -6.4]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.n, vec![14, 15]);
        assert_eq!(table.obs, vec![1497.8, 1597.4]);
        assert_eq!(table.logE, vec![-6.1, -6.4]);
    }

    #[test]
    fn test_mode_table_to_frame() {
        let mut table = ModeTable::new();
        table.push(20, [0.1, 2000.0, -1.0, 1999.2, 0.4, -5.0]);

        let df = table.to_frame().unwrap();
        assert_eq!(df.shape(), (1, 7));
        assert_eq!(df.column("n").unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column("logE").unwrap().dtype(), &DataType::Float64);
    }

    #[test]
    fn test_sample_report_lookup() {
        let mut report = SampleReport::new();
        report.scalars.insert("mass/Msun".to_string(), 1.5);
        report.degrees.insert("l1".to_string(), ModeTable::new());

        assert_eq!(report.get("mass/Msun"), Some(1.5));
        assert_eq!(report.get("age"), None);
        assert!(report.degree(1).is_some());
        assert!(report.degree(0).is_none());
        assert_eq!(report.mode_count(), 0);
    }
}
