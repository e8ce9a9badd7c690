use eframe::egui::{ScrollArea, Ui};

use crate::data::model::DataTable;
use crate::state::AppState;
use crate::ui;

// ---------------------------------------------------------------------------
// Filters tab – column projection of the table
// ---------------------------------------------------------------------------

/// Show the table projected to the columns picked in the side panel.
/// Column projection only; rows pass through untouched.
pub fn show(ui: &mut Ui, state: &AppState, table: &DataTable) {
    ui.heading("🛠 Filtered Data Preview");
    ui.label("Pick columns in the side panel; rows are never filtered.");
    ui.add_space(4.0);

    let selected = state.selected_filter_columns();
    let projected = table.select(&selected);

    ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        ui::data_table(ui, "filtered_view", &projected, projected.n_rows, true);
    });
}
