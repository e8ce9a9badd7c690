use eframe::egui::{self, Color32, Ui};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints};

use crate::data::model::DataTable;
use crate::data::stats::{self, HISTOGRAM_BINS};
use crate::state::AppState;
use crate::ui;

// ---------------------------------------------------------------------------
// Visualizations tab – histogram with density overlay
// ---------------------------------------------------------------------------

pub fn show(ui: &mut Ui, state: &mut AppState, table: &DataTable) {
    ui.heading("📊 Select a Column for Distribution");

    let numeric = table.numeric_column_names();
    if numeric.is_empty() {
        ui::warning_banner(ui, "No numeric columns found in the dataset.");
        return;
    }

    // Selection may be stale after a re-open; fall back to the first column.
    if !state
        .distribution_column
        .as_ref()
        .is_some_and(|c| numeric.contains(c))
    {
        state.distribution_column = numeric.first().cloned();
    }
    let current = state.distribution_column.clone().unwrap_or_default();

    egui::ComboBox::from_label("Numeric column")
        .selected_text(&current)
        .show_ui(ui, |ui: &mut Ui| {
            for col in &numeric {
                if ui.selectable_label(current == *col, col).clicked() {
                    state.distribution_column = Some(col.clone());
                }
            }
        });

    let Some(column) = table.column(&current) else {
        return;
    };
    let values = column.numeric_values();
    let bins = stats::histogram(&values, HISTOGRAM_BINS);
    if bins.is_empty() {
        ui::warning_banner(ui, "Column has no values to plot.");
        return;
    }

    let bin_width = bins[0].width;
    let bars: Vec<Bar> = bins
        .iter()
        .map(|b| {
            Bar::new(b.center, b.count as f64)
                .width(b.width)
                .fill(Color32::from_rgb(70, 130, 200))
        })
        .collect();
    let chart = BarChart::new(bars).name(&current);

    let density = stats::density_curve(&values, bin_width, 200);

    Plot::new("distribution_plot")
        .x_axis_label(&current)
        .y_axis_label("Count")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
            if !density.is_empty() {
                let points: PlotPoints = density.into_iter().collect();
                plot_ui.line(
                    Line::new(points)
                        .name("density")
                        .color(Color32::from_rgb(230, 120, 50))
                        .width(2.0),
                );
            }
        });
}
