//! Tests for per-sample diagnostic report loading

use super::*;
use crate::error::MesaError;
use crate::reader::load_sample;

const SAMPLE_REPORT: &str = "\
 mass/Msun 1.5D0
 Y 0.27
 FeH -0.1
 chi2 12.3456D-01

 l=0
 15  0.25  2001.5  -3.2  1998.1  0.5  -5.8
 16  0.75  2136.2  -3.6  2132.9  0.4  -6.0

 l=1
 15  1.10  2065.0  -3.4  2061.3  0.6  -6.2
";

#[test]
fn test_sample_report_parsing() {
    let file = write_fixture(SAMPLE_REPORT);

    let report = load_sample(file.path()).unwrap();

    assert_eq!(report.get("mass/Msun"), Some(1.5));
    assert_eq!(report.get("Y"), Some(0.27));
    assert_eq!(report.get("FeH"), Some(-0.1));
    assert_eq!(report.get("chi2"), Some(1.23456));

    let l0 = report.degree(0).unwrap();
    assert_eq!(l0.n, vec![15, 16]);
    assert_eq!(l0.chi2, vec![0.25, 0.75]);
    assert_eq!(l0.obs, vec![1998.1, 2132.9]);
    assert_eq!(l0.logE, vec![-5.8, -6.0]);

    let l1 = report.degree(1).unwrap();
    assert_eq!(l1.len(), 1);
    assert_eq!(l1.mdl, vec![2065.0]);
    assert_eq!(report.mode_count(), 3);
}

#[test]
fn test_single_mode_bucket() {
    let file = write_fixture("l=3\n 21 0.1 3000.0 -4.0 2996.2 0.3 -7.1\n");

    let report = load_sample(file.path()).unwrap();
    let l3 = &report.degrees["l3"];

    assert_eq!(l3.n, vec![21]);
    assert_eq!(l3.chi2.len(), 1);
    assert_eq!(l3.mdl.len(), 1);
    assert_eq!(l3.cor.len(), 1);
    assert_eq!(l3.obs.len(), 1);
    assert_eq!(l3.err.len(), 1);
    assert_eq!(l3.logE.len(), 1);
}

#[test]
fn test_multi_word_keys() {
    let file = write_fixture(" initial mass 1.2\n total chi2 of fit 3.0D+00\n age 4.5e9\n");

    let report = load_sample(file.path()).unwrap();

    assert_eq!(report.get("initial mass"), Some(1.2));
    assert_eq!(report.get("total chi2 of fit"), Some(3.0));
    assert_eq!(report.get("age"), Some(4.5e9));
}

#[test]
fn test_six_word_key_read_as_mode_row() {
    let file = write_fixture("l=0\n1 2 3 4 5 6 7\n");
    let report = load_sample(file.path()).unwrap();
    assert_eq!(report.degree(0).unwrap().n, vec![1]);

    let file = write_fixture("l=0\na b c d e f 7\n");
    match load_sample(file.path()).unwrap_err() {
        MesaError::InvalidValue { column, value, .. } => {
            assert_eq!(column, "n");
            assert_eq!(value, "a");
        }
        other => panic!("Expected InvalidValue, got {:?}", other),
    }
}

#[test]
fn test_repeated_degree_resets_bucket() {
    let content = "l=2\n1 1 1 1 1 1 1\n2 2 2 2 2 2 2\nl=2\n3 3 3 3 3 3 3\n";
    let file = write_fixture(content);

    let report = load_sample(file.path()).unwrap();
    assert_eq!(report.degree(2).unwrap().n, vec![3]);
}

#[test]
fn test_degree_uses_last_character() {
    let file = write_fixture("l=12\n5 1 1 1 1 1 1\n");

    let report = load_sample(file.path()).unwrap();
    assert_eq!(report.degree(2).unwrap().n, vec![5]);
    assert!(report.degree(1).is_none());
}

#[test]
fn test_invalid_degree_suffix() {
    let file = write_fixture("mass 1.0\nl=x\n");

    match load_sample(file.path()).unwrap_err() {
        MesaError::InvalidDegree { line, token, .. } => {
            assert_eq!(line, 2);
            assert_eq!(token, "l=x");
        }
        other => panic!("Expected InvalidDegree, got {:?}", other),
    }
}

#[test]
fn test_mode_row_without_degree() {
    let file = write_fixture("mass 1.0\n1 2 3 4 5 6 7\n");

    match load_sample(file.path()).unwrap_err() {
        MesaError::ModeBeforeDegree { line, .. } => assert_eq!(line, 2),
        other => panic!("Expected ModeBeforeDegree, got {:?}", other),
    }
}

#[test]
fn test_invalid_scalar_value() {
    let file = write_fixture("mass/Msun heavy\n");

    let err = load_sample(file.path()).unwrap_err();
    assert!(err.is_format_error());
    match err {
        MesaError::InvalidValue { column, value, .. } => {
            assert_eq!(column, "mass/Msun");
            assert_eq!(value, "heavy");
        }
        other => panic!("Expected InvalidValue, got {:?}", other),
    }
}

#[test]
fn test_single_token_line_uses_empty_key() {
    let file = write_fixture("42.0\n");

    let report = load_sample(file.path()).unwrap();
    assert_eq!(report.get(""), Some(42.0));
}

#[test]
fn test_report_serialises_flat() {
    let file = write_fixture("mass 1.0\nl=0\n1 2 3 4 5 6 7\n");
    let report = load_sample(file.path()).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["mass"], 1.0);
    assert_eq!(json["l0"]["n"][0], 1);
    assert_eq!(json["l0"]["logE"][0], 7.0);
}
