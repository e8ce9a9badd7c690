use eframe::egui;

use crate::state::{AppState, Tab};
use crate::ui::{self, distribution, filter, insights, panels, preview};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct CsvExplorerApp {
    pub state: AppState,
}

impl eframe::App for CsvExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar + status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: upload + column selection ----
        egui::SidePanel::left("upload_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: tabbed views ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(table) = self.state.table.clone() else {
                ui::waiting_banner(ui);
                return;
            };

            panels::tab_strip(ui, &mut self.state);
            match self.state.tab {
                Tab::Preview => preview::show(ui, &table),
                Tab::Visualizations => distribution::show(ui, &mut self.state, &table),
                Tab::Insights => insights::show(ui, &mut self.state, &table),
                Tab::Filters => filter::show(ui, &self.state, &table),
            }
        });
    }
}
