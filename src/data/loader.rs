use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use super::model::{CellValue, Column, DataTable, Dtype};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Ingestion failures. These are caught at the UI edge and shown as an
/// "invalid CSV" banner rather than aborting the render.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV file has no header row")]
    EmptyFile,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a CSV file from disk into a [`DataTable`].
///
/// Date-named columns (per [`is_date_column`]) are normalized to timestamps
/// with per-value failures coerced to null.
pub fn load_csv_path(path: &Path) -> Result<DataTable, LoadError> {
    let bytes = std::fs::read(path)?;
    load_csv_bytes(&bytes, is_date_column)
}

/// Parse CSV bytes into a [`DataTable`].
///
/// The `date_predicate` decides, from the column name alone, which columns
/// get the timestamp-coercion pass. The default heuristic is a
/// case-insensitive "date" substring match; it is a naming convention, not
/// type information, so callers can swap in a stricter rule.
pub fn load_csv_bytes(
    bytes: &[u8],
    date_predicate: impl Fn(&str) -> bool,
) -> Result<DataTable, LoadError> {
    let mut reader = csv::Reader::from_reader(bytes);

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    if headers.is_empty() {
        return Err(LoadError::EmptyFile);
    }

    // Collect the raw field grid first; ragged rows and bad UTF-8 surface
    // here as csv errors.
    let mut raw_columns: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record?;
        for (idx, field) in record.iter().enumerate() {
            raw_columns[idx].push(field.to_string());
        }
    }

    let columns = headers
        .into_iter()
        .zip(raw_columns)
        .map(|(name, raw)| {
            if date_predicate(&name) {
                build_timestamp_column(name, &raw)
            } else {
                build_inferred_column(name, &raw)
            }
        })
        .collect();

    Ok(DataTable::new(columns))
}

/// Default date heuristic: the column name contains "date", case-insensitive.
/// Columns that hold dates under other names are left untouched.
pub fn is_date_column(name: &str) -> bool {
    name.to_ascii_lowercase().contains("date")
}

// ---------------------------------------------------------------------------
// Dtype inference
// ---------------------------------------------------------------------------

/// Infer a column dtype from its raw fields and convert the values.
///
/// The strictest type accepted by every non-empty field wins:
/// integer, then float, then boolean, falling back to text. Empty fields
/// become null and do not vote.
fn build_inferred_column(name: String, raw: &[String]) -> Column {
    let non_empty = || raw.iter().filter(|s| !s.trim().is_empty());

    let dtype = if non_empty().count() == 0 {
        Dtype::Text
    } else if non_empty().all(|s| s.trim().parse::<i64>().is_ok()) {
        Dtype::Integer
    } else if non_empty().all(|s| s.trim().parse::<f64>().is_ok()) {
        Dtype::Float
    } else if non_empty().all(|s| matches!(s.trim(), "true" | "false")) {
        Dtype::Boolean
    } else {
        Dtype::Text
    };

    let values = raw
        .iter()
        .map(|s| {
            let s = s.trim();
            if s.is_empty() {
                return CellValue::Null;
            }
            match dtype {
                Dtype::Integer => CellValue::Integer(s.parse().unwrap_or_default()),
                Dtype::Float => CellValue::Float(s.parse().unwrap_or(f64::NAN)),
                Dtype::Boolean => CellValue::Bool(s == "true"),
                _ => CellValue::Text(s.to_string()),
            }
        })
        .collect();

    Column {
        name,
        dtype,
        values,
    }
}

// ---------------------------------------------------------------------------
// Date normalization
// ---------------------------------------------------------------------------

/// Reinterpret every raw field of a date-named column as a timestamp.
/// Values that fail to parse become null; this pass never errors.
fn build_timestamp_column(name: String, raw: &[String]) -> Column {
    let values = raw
        .iter()
        .map(|s| match parse_timestamp(s.trim()) {
            Some(ts) => CellValue::Timestamp(ts),
            None => CellValue::Null,
        })
        .collect();

    Column {
        name,
        dtype: Dtype::Timestamp,
        values,
    }
}

/// Best-effort timestamp parse over the formats commonly seen in CSV exports.
fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    for fmt in ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d.and_hms_opt(0, 0, 0).unwrap_or_default());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consistent_csv_yields_matching_shape() {
        let csv = b"name,age,score\nalice,30,9.5\nbob,41,7.25\ncarol,29,8.0\n";
        let table = load_csv_bytes(csv, is_date_column).unwrap();
        assert_eq!(table.n_rows, 3);
        assert_eq!(table.n_cols(), 3);
        assert_eq!(table.column_names(), vec!["name", "age", "score"]);
    }

    #[test]
    fn dtype_inference_picks_strictest_type() {
        let csv = b"a,b,c,d\n1,1.5,true,x\n2,2,false,7\n";
        let table = load_csv_bytes(csv, is_date_column).unwrap();
        assert_eq!(table.column("a").unwrap().dtype, Dtype::Integer);
        assert_eq!(table.column("b").unwrap().dtype, Dtype::Float);
        assert_eq!(table.column("c").unwrap().dtype, Dtype::Boolean);
        assert_eq!(table.column("d").unwrap().dtype, Dtype::Text);
    }

    #[test]
    fn empty_fields_become_null_without_breaking_inference() {
        let csv = b"v\n1\n\n3\n";
        let table = load_csv_bytes(csv, is_date_column).unwrap();
        let col = table.column("v").unwrap();
        assert_eq!(col.dtype, Dtype::Integer);
        assert_eq!(col.null_count(), 1);
        assert_eq!(col.values[0], CellValue::Integer(1));
        assert_eq!(col.values[1], CellValue::Null);
    }

    #[test]
    fn date_named_columns_are_coerced_or_nulled() {
        let csv = b"Start_Date,value\n2024-01-15,1\nnot a date,2\n2024-02-01 08:30:00,3\n";
        let table = load_csv_bytes(csv, is_date_column).unwrap();
        let col = table.column("Start_Date").unwrap();
        assert_eq!(col.dtype, Dtype::Timestamp);
        assert!(matches!(col.values[0], CellValue::Timestamp(_)));
        assert_eq!(col.values[1], CellValue::Null);
        assert!(matches!(col.values[2], CellValue::Timestamp(_)));
        // coerced column must not land in either classification set
        assert!(table.numeric_column_names() == vec!["value"]);
        assert!(table.categorical_column_names().is_empty());
    }

    #[test]
    fn non_matching_columns_are_untouched_even_if_they_hold_dates() {
        let csv = b"created,value\n2024-01-15,1\n2024-02-01,2\n";
        let table = load_csv_bytes(csv, is_date_column).unwrap();
        assert_eq!(table.column("created").unwrap().dtype, Dtype::Text);
    }

    #[test]
    fn date_predicate_is_pluggable() {
        let csv = b"created,value\n2024-01-15,1\n";
        let table = load_csv_bytes(csv, |name| name == "created").unwrap();
        assert_eq!(table.column("created").unwrap().dtype, Dtype::Timestamp);
    }

    #[test]
    fn ragged_rows_surface_as_an_error_value() {
        let csv = b"a,b\n1,2\n3\n";
        let err = load_csv_bytes(csv, is_date_column).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn timestamp_formats() {
        assert!(parse_timestamp("2024-03-01").is_some());
        assert!(parse_timestamp("2024/03/01").is_some());
        assert!(parse_timestamp("03/01/2024").is_some());
        assert!(parse_timestamp("2024-03-01T12:00:00").is_some());
        assert!(parse_timestamp("2024-03-01T12:00:00Z").is_some());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("").is_none());
    }
}
