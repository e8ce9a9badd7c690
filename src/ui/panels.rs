use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::{AppState, StatusKind, Tab};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar with the status banner.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!("{} rows × {} columns", table.n_rows, table.n_cols()));
            ui.separator();
        }

        match &state.status {
            Some((StatusKind::Success, msg)) => {
                ui.label(RichText::new(format!("✔ {msg}")).color(Color32::from_rgb(60, 180, 90)));
            }
            Some((StatusKind::Error, msg)) => {
                ui.label(RichText::new(format!("✘ {msg}")).color(Color32::RED));
            }
            None => {
                ui.weak("Waiting for a CSV file…");
            }
        }
    });
}

/// The tab strip above the central panel.
pub fn tab_strip(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        for tab in Tab::ALL {
            if ui.selectable_label(state.tab == tab, tab.label()).clicked() {
                state.tab = tab;
            }
        }
    });
    ui.separator();
}

// ---------------------------------------------------------------------------
// Left side panel – upload + column filter
// ---------------------------------------------------------------------------

/// Render the left panel: open button, schema summary, and the filter-view
/// column multiselect.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Upload Your Data");
    ui.add_space(4.0);

    if ui.button("📂 Choose a CSV file…").clicked() {
        open_file_dialog(state);
    }
    ui.separator();

    let Some(table) = &state.table else {
        ui.label("No file loaded.");
        return;
    };

    ui.strong("Columns");
    let columns: Vec<(String, String)> = table
        .columns
        .iter()
        .map(|c| (c.name.clone(), c.dtype.to_string()))
        .collect();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.label("Select columns to display in the Filters tab:");
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.filter_columns = columns.iter().map(|(n, _)| n.clone()).collect();
                }
                if ui.small_button("None").clicked() {
                    state.filter_columns.clear();
                }
            });

            for (name, dtype) in &columns {
                let mut checked = state.filter_columns.contains(name);
                if ui
                    .checkbox(&mut checked, format!("{name}  ({dtype})"))
                    .changed()
                {
                    state.toggle_filter_column(name);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Open the native file picker and ingest the chosen CSV. Parse failures
/// land in the status banner instead of aborting.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open CSV data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_csv_path(&path) {
            Ok(table) => {
                log::info!(
                    "Loaded {} rows with columns {:?}",
                    table.n_rows,
                    table.column_names()
                );
                state.set_table(table);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.set_load_error(format!("{e}"));
            }
        }
    }
}
