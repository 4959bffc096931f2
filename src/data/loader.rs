use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use super::model::CoverageTable;

/// Default location of the coverage document, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "coverage_data.json";

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("coverage file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid coverage document: {0}")]
    DataFormat(String),
    #[error("cell '{cell}' in {map}: expected a number, found {found}")]
    Validation {
        cell: String,
        map: &'static str,
        found: &'static str,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read and parse a coverage document from disk.
pub fn load_coverage(path: &Path) -> Result<CoverageTable, LoaderError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            LoaderError::FileNotFound(path.to_path_buf())
        } else {
            LoaderError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    parse_document(&text)
}

/// Parse a coverage document into a joined table.
///
/// Expected shape (`coverageStability` is optional, per key and as a whole):
///
/// ```json
/// {
///   "coverageMap":       { "85283473fffffff": 2.71, ... },
///   "coverageStability": { "85283473fffffff": 0.84, ... }
/// }
/// ```
pub fn parse_document(text: &str) -> Result<CoverageTable, LoaderError> {
    let root: Value = serde_json::from_str(text)
        .map_err(|e| LoaderError::DataFormat(format!("not valid JSON: {e}")))?;

    let doc = root
        .as_object()
        .ok_or_else(|| LoaderError::DataFormat("top level is not an object".into()))?;

    let averages_obj = doc
        .get("coverageMap")
        .ok_or_else(|| LoaderError::DataFormat("missing 'coverageMap' key".into()))?
        .as_object()
        .ok_or_else(|| LoaderError::DataFormat("'coverageMap' is not an object".into()))?;

    // serde_json keeps document key order, so the coverage map's key order
    // becomes the table's row order (and the ranking's tie-break order).
    let mut averages = Vec::with_capacity(averages_obj.len());
    for (cell, value) in averages_obj {
        averages.push((cell.clone(), numeric(cell, "coverageMap", value)?));
    }

    let mut stability = HashMap::new();
    if let Some(value) = doc.get("coverageStability") {
        let stability_obj = value.as_object().ok_or_else(|| {
            LoaderError::DataFormat("'coverageStability' is not an object".into())
        })?;
        for (cell, value) in stability_obj {
            stability.insert(cell.clone(), numeric(cell, "coverageStability", value)?);
        }
    }

    Ok(CoverageTable::join(averages, &stability))
}

fn numeric(cell: &str, map: &'static str, value: &Value) -> Result<f64, LoaderError> {
    value.as_f64().ok_or_else(|| LoaderError::Validation {
        cell: cell.to_string(),
        map,
        found: type_name(value),
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_CELLS: &str =
        r#"{"coverageMap": {"a": 2.0, "b": 4.0}, "coverageStability": {"a": 2.0}}"#;

    #[test]
    fn joins_both_maps_and_defaults_missing_stability() {
        let table = parse_document(TWO_CELLS).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.records[0].cell, "a");
        assert_eq!(table.records[0].stability, 2.0);
        assert_eq!(table.records[0].weighted, 4.0);
        assert_eq!(table.records[1].cell, "b");
        assert_eq!(table.records[1].stability, 1.0);
        assert_eq!(table.records[1].weighted, 4.0);
    }

    #[test]
    fn document_key_order_is_table_order() {
        let table =
            parse_document(r#"{"coverageMap": {"z": 1.0, "m": 2.0, "a": 3.0}}"#).unwrap();
        let cells: Vec<&str> = table.records.iter().map(|r| r.cell.as_str()).collect();
        assert_eq!(cells, ["z", "m", "a"]);
    }

    #[test]
    fn absent_stability_map_is_not_an_error() {
        let table = parse_document(r#"{"coverageMap": {"a": 1.5}}"#).unwrap();
        assert_eq!(table.records[0].stability, 1.0);
        assert_eq!(table.records[0].weighted, 1.5);
    }

    #[test]
    fn integer_values_parse_as_numbers() {
        let table = parse_document(r#"{"coverageMap": {"a": 3}}"#).unwrap();
        assert_eq!(table.records[0].average, 3.0);
    }

    #[test]
    fn missing_coverage_map_is_a_format_error() {
        let err = parse_document(r#"{"coverageStability": {"a": 1.0}}"#).unwrap_err();
        assert!(matches!(err, LoaderError::DataFormat(_)));
    }

    #[test]
    fn malformed_json_is_a_format_error() {
        let err = parse_document("{not json").unwrap_err();
        assert!(matches!(err, LoaderError::DataFormat(_)));
    }

    #[test]
    fn top_level_array_is_a_format_error() {
        let err = parse_document("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, LoaderError::DataFormat(_)));
    }

    #[test]
    fn stability_of_wrong_type_is_a_format_error() {
        let err =
            parse_document(r#"{"coverageMap": {"a": 1.0}, "coverageStability": 3}"#).unwrap_err();
        assert!(matches!(err, LoaderError::DataFormat(_)));
    }

    #[test]
    fn string_average_fails_validation() {
        let err = parse_document(r#"{"coverageMap": {"a": "2.5"}}"#).unwrap_err();
        match err {
            LoaderError::Validation { cell, map, .. } => {
                assert_eq!(cell, "a");
                assert_eq!(map, "coverageMap");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn string_stability_fails_validation() {
        let err = parse_document(
            r#"{"coverageMap": {"a": 1.0}, "coverageStability": {"a": "high"}}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LoaderError::Validation {
                map: "coverageStability",
                ..
            }
        ));
    }

    #[test]
    fn missing_file_reports_file_not_found() {
        let err = load_coverage(Path::new("no_such_dir/coverage_data.json")).unwrap_err();
        assert!(matches!(err, LoaderError::FileNotFound(_)));
    }

    #[test]
    fn parsing_is_idempotent() {
        let first = parse_document(TWO_CELLS).unwrap();
        let second = parse_document(TWO_CELLS).unwrap();
        assert_eq!(first, second);
    }
}
