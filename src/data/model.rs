use std::fmt;

use chrono::NaiveDateTime;

// ---------------------------------------------------------------------------
// Dtype – declared per-column value type
// ---------------------------------------------------------------------------

/// The declared type of a column, inferred at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dtype {
    Integer,
    Float,
    Boolean,
    Text,
    /// Result of date normalization on a "date"-named column.
    Timestamp,
}

impl Dtype {
    /// Numeric columns feed the distribution and correlation views.
    pub fn is_numeric(self) -> bool {
        matches!(self, Dtype::Integer | Dtype::Float)
    }

    /// Categorical (generic text) columns feed the top-categories view.
    pub fn is_categorical(self) -> bool {
        matches!(self, Dtype::Text)
    }
}

impl fmt::Display for Dtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dtype::Integer => "integer",
            Dtype::Float => "float",
            Dtype::Boolean => "boolean",
            Dtype::Text => "text",
            Dtype::Timestamp => "timestamp",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// CellValue – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common CSV-inferred dtypes.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Timestamp(NaiveDateTime),
    Null,
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Interpret the value as an `f64` for statistics and plotting.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Timestamp(t) => write!(f, "{}", t.format("%Y-%m-%d %H:%M:%S")),
            CellValue::Null => write!(f, ""),
        }
    }
}

// ---------------------------------------------------------------------------
// Column – one named, uniformly-typed column
// ---------------------------------------------------------------------------

/// A single column: name, declared dtype, and one value per row.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub dtype: Dtype,
    pub values: Vec<CellValue>,
}

impl Column {
    /// Number of null cells in this column.
    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_null()).count()
    }

    /// All non-null values as `f64`, for numeric columns.
    pub fn numeric_values(&self) -> Vec<f64> {
        self.values.iter().filter_map(CellValue::as_f64).collect()
    }
}

// ---------------------------------------------------------------------------
// DataTable – the complete parsed table
// ---------------------------------------------------------------------------

/// The full parsed table. Immutable once loaded; replaced wholesale when the
/// user opens a new file. All derived views below are pure queries.
#[derive(Debug, Clone)]
pub struct DataTable {
    pub columns: Vec<Column>,
    pub n_rows: usize,
}

impl DataTable {
    pub fn new(columns: Vec<Column>) -> Self {
        let n_rows = columns.first().map(|c| c.values.len()).unwrap_or(0);
        debug_assert!(columns.iter().all(|c| c.values.len() == n_rows));
        DataTable { columns, n_rows }
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    /// Ordered column names, as they appeared in the source header.
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Names of columns with a numeric declared dtype.
    pub fn numeric_column_names(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.dtype.is_numeric())
            .map(|c| c.name.clone())
            .collect()
    }

    /// Names of columns with a generic text dtype.
    pub fn categorical_column_names(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.dtype.is_categorical())
            .map(|c| c.name.clone())
            .collect()
    }

    /// The first `n` rows, for preview tables.
    pub fn head(&self, n: usize) -> Vec<Vec<&CellValue>> {
        (0..self.n_rows.min(n))
            .map(|row| self.columns.iter().map(|c| &c.values[row]).collect())
            .collect()
    }

    /// Per-column null counts, in column order.
    pub fn null_counts(&self) -> Vec<(String, usize)> {
        self.columns
            .iter()
            .map(|c| (c.name.clone(), c.null_count()))
            .collect()
    }

    /// Project the table to the named columns, in the order given. Unknown
    /// names are skipped. Row order and count are preserved.
    pub fn select(&self, names: &[String]) -> DataTable {
        let columns: Vec<Column> = names
            .iter()
            .filter_map(|n| self.column(n).cloned())
            .collect();
        DataTable {
            columns,
            n_rows: self.n_rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> DataTable {
        DataTable::new(vec![
            Column {
                name: "amount".into(),
                dtype: Dtype::Float,
                values: vec![
                    CellValue::Float(1.5),
                    CellValue::Null,
                    CellValue::Float(3.0),
                ],
            },
            Column {
                name: "city".into(),
                dtype: Dtype::Text,
                values: vec![
                    CellValue::Text("Oslo".into()),
                    CellValue::Text("Lima".into()),
                    CellValue::Null,
                ],
            },
            Column {
                name: "flag".into(),
                dtype: Dtype::Boolean,
                values: vec![
                    CellValue::Bool(true),
                    CellValue::Bool(false),
                    CellValue::Bool(true),
                ],
            },
        ])
    }

    #[test]
    fn classification_sets_are_disjoint_and_cover_with_other() {
        let t = sample_table();
        let numeric = t.numeric_column_names();
        let categorical = t.categorical_column_names();
        assert_eq!(numeric, vec!["amount"]);
        assert_eq!(categorical, vec!["city"]);
        for n in &numeric {
            assert!(!categorical.contains(n));
        }
        // the boolean column is "other": in neither set
        assert_eq!(numeric.len() + categorical.len() + 1, t.n_cols());
    }

    #[test]
    fn null_counts_match_missing_cells() {
        let t = sample_table();
        let counts = t.null_counts();
        assert_eq!(counts[0], ("amount".to_string(), 1));
        assert_eq!(counts[1], ("city".to_string(), 1));
        assert_eq!(counts[2], ("flag".to_string(), 0));
        // N rows with M valid values leaves N - M nulls
        let amount = t.column("amount").unwrap();
        let valid = amount.values.iter().filter(|v| !v.is_null()).count();
        assert_eq!(amount.null_count(), t.n_rows - valid);
    }

    #[test]
    fn select_projects_exactly_the_requested_columns_in_order() {
        let t = sample_table();
        let projected = t.select(&["flag".into(), "amount".into()]);
        assert_eq!(projected.column_names(), vec!["flag", "amount"]);
        assert_eq!(projected.n_rows, t.n_rows);
        assert_eq!(
            projected.column("amount").unwrap().values,
            t.column("amount").unwrap().values
        );
    }

    #[test]
    fn select_empty_keeps_row_count() {
        let t = sample_table();
        let projected = t.select(&[]);
        assert_eq!(projected.n_cols(), 0);
        assert_eq!(projected.n_rows, 3);
    }

    #[test]
    fn head_truncates_to_available_rows() {
        let t = sample_table();
        assert_eq!(t.head(5).len(), 3);
        assert_eq!(t.head(2).len(), 2);
    }
}
