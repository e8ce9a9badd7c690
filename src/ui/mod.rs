/// UI layer: panels plus one module per tab. Every view reads the table and
/// selections from [`crate::state::AppState`] and renders; none of them hold
/// state of their own.
pub mod distribution;
pub mod filter;
pub mod insights;
pub mod panels;
pub mod preview;

use eframe::egui::{Color32, RichText, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::data::model::DataTable;

/// Amber banner for "no data of this kind" outcomes, so the user can tell
/// an empty classification set apart from a failure.
pub fn warning_banner(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(format!("⚠ {text}")).color(Color32::from_rgb(240, 180, 40)));
}

/// Grey hint shown while no file is open.
pub fn waiting_banner(ui: &mut Ui) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.heading("Open a CSV file to get insights  (File → Open…)");
    });
}

/// Render a [`DataTable`] with a header row. Shared by the preview and
/// filter views. `scroll` controls the table's own vertical scroll area;
/// pass false when stacking tables in one panel.
pub fn data_table(ui: &mut Ui, id: &str, table: &DataTable, max_rows: usize, scroll: bool) {
    if table.n_cols() == 0 {
        warning_banner(ui, "No columns selected.");
        return;
    }

    let rows = table.head(max_rows);
    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(scroll)
            .columns(TableColumn::auto().resizable(true).at_least(60.0), table.n_cols())
            .header(22.0, |mut header| {
                for col in &table.columns {
                    header.col(|ui| {
                        ui.strong(format!("{} ({})", col.name, col.dtype));
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, rows.len(), |mut row| {
                    for value in &rows[row.index()] {
                        row.col(|ui| {
                            if value.is_null() {
                                ui.weak("null");
                            } else {
                                ui.label(value.to_string());
                            }
                        });
                    }
                });
            });
    });
}
