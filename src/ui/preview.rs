use eframe::egui::{ScrollArea, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::data::model::DataTable;
use crate::ui;

/// Rows shown in the head preview.
const PREVIEW_ROWS: usize = 5;

// ---------------------------------------------------------------------------
// Data preview tab – head rows + missing-value summary
// ---------------------------------------------------------------------------

pub fn show(ui: &mut Ui, table: &DataTable) {
    ScrollArea::vertical().show(ui, |ui: &mut Ui| {
        ui.heading("🔍 Data Preview");
        ui::data_table(ui, "preview_head", table, PREVIEW_ROWS, false);

        ui.add_space(12.0);
        ui.heading("❌ Missing Values");
        null_count_table(ui, table);
    });
}

/// Per-column null counts over the full table.
fn null_count_table(ui: &mut Ui, table: &DataTable) {
    let counts = table.null_counts();

    ui.push_id("null_counts", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(TableColumn::auto().at_least(120.0))
            .column(TableColumn::auto().at_least(80.0))
            .header(22.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Column");
                });
                header.col(|ui| {
                    ui.strong("Missing");
                });
            })
            .body(|mut body| {
                for (name, count) in &counts {
                    body.row(18.0, |mut row| {
                        row.col(|ui| {
                            ui.label(name);
                        });
                        row.col(|ui| {
                            ui.label(count.to_string());
                        });
                    });
                }
            });
    });
}
