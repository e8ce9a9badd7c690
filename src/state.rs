use std::collections::BTreeSet;

use crate::data::model::DataTable;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The central-panel tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Preview,
    Visualizations,
    Insights,
    Filters,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Preview, Tab::Visualizations, Tab::Insights, Tab::Filters];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Preview => "Data Preview",
            Tab::Visualizations => "Visualizations",
            Tab::Insights => "Insights",
            Tab::Filters => "Filters",
        }
    }
}

/// Analysis mode for the insights tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightsMode {
    Correlation,
    TopCategories,
}

impl InsightsMode {
    pub fn label(self) -> &'static str {
        match self {
            InsightsMode::Correlation => "Correlation",
            InsightsMode::TopCategories => "Top Categories",
        }
    }
}

/// Kind of status banner shown in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// The full UI state, independent of rendering. Every view is a pure
/// function of `(table, selections)`; nothing here is derived data.
pub struct AppState {
    /// Parsed table (None until the user opens a file). Replaced wholesale
    /// on re-open, never mutated in place.
    pub table: Option<DataTable>,

    /// Active central-panel tab.
    pub tab: Tab,

    /// Numeric column chosen for the distribution histogram.
    pub distribution_column: Option<String>,

    /// Which analysis the insights tab shows.
    pub insights_mode: InsightsMode,

    /// Categorical column chosen for top categories.
    pub category_column: Option<String>,

    /// Columns selected in the filter view (defaults to all on load).
    pub filter_columns: BTreeSet<String>,

    /// Status banner shown in the top bar.
    pub status: Option<(StatusKind, String)>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            table: None,
            tab: Tab::Preview,
            distribution_column: None,
            insights_mode: InsightsMode::Correlation,
            category_column: None,
            filter_columns: BTreeSet::new(),
            status: None,
        }
    }
}

impl AppState {
    /// Install a freshly parsed table, resetting all selections to their
    /// defaults (first numeric / categorical column, all columns filtered in).
    pub fn set_table(&mut self, table: DataTable) {
        self.distribution_column = table.numeric_column_names().into_iter().next();
        self.category_column = table.categorical_column_names().into_iter().next();
        self.filter_columns = table.column_names().into_iter().collect();
        self.status = Some((
            StatusKind::Success,
            format!("Loaded {} rows × {} columns", table.n_rows, table.n_cols()),
        ));
        self.table = Some(table);
    }

    /// Record an ingestion failure without touching the current table.
    pub fn set_load_error(&mut self, message: String) {
        self.status = Some((StatusKind::Error, message));
    }

    pub fn toggle_filter_column(&mut self, name: &str) {
        if !self.filter_columns.remove(name) {
            self.filter_columns.insert(name.to_string());
        }
    }

    /// Filter-view selection in table column order.
    pub fn selected_filter_columns(&self) -> Vec<String> {
        match &self.table {
            Some(t) => t
                .column_names()
                .into_iter()
                .filter(|n| self.filter_columns.contains(n))
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::{is_date_column, load_csv_bytes};

    fn load(csv: &[u8]) -> DataTable {
        load_csv_bytes(csv, is_date_column).unwrap()
    }

    #[test]
    fn set_table_defaults_selections() {
        let mut state = AppState::default();
        state.set_table(load(b"city,amount\nOslo,1\nLima,2\n"));
        assert_eq!(state.distribution_column.as_deref(), Some("amount"));
        assert_eq!(state.category_column.as_deref(), Some("city"));
        assert_eq!(state.filter_columns.len(), 2);
        assert!(matches!(state.status, Some((StatusKind::Success, _))));
    }

    #[test]
    fn set_table_with_no_numeric_columns_leaves_no_selection() {
        let mut state = AppState::default();
        state.set_table(load(b"a,b\nx,y\n"));
        assert_eq!(state.distribution_column, None);
        assert_eq!(state.category_column.as_deref(), Some("a"));
    }

    #[test]
    fn load_error_keeps_previous_table() {
        let mut state = AppState::default();
        state.set_table(load(b"v\n1\n"));
        state.set_load_error("invalid CSV".into());
        assert!(state.table.is_some());
        assert!(matches!(state.status, Some((StatusKind::Error, _))));
    }

    #[test]
    fn filter_selection_preserves_table_order() {
        let mut state = AppState::default();
        state.set_table(load(b"c,a,b\n1,2,3\n"));
        state.toggle_filter_column("a");
        assert_eq!(state.selected_filter_columns(), vec!["c", "b"]);
        state.toggle_filter_column("a");
        assert_eq!(state.selected_filter_columns(), vec!["c", "a", "b"]);
    }
}
