use eframe::egui::{self, Color32, RichText, Stroke, Ui};
use egui_plot::{Bar, BarChart, Plot, PlotPoint, PlotPoints, Polygon, Text};

use crate::color;
use crate::data::model::DataTable;
use crate::data::stats;
use crate::state::{AppState, InsightsMode};
use crate::ui;

// ---------------------------------------------------------------------------
// Insights tab – correlation heatmap or top categories
// ---------------------------------------------------------------------------

pub fn show(ui: &mut Ui, state: &mut AppState, table: &DataTable) {
    let current = state.insights_mode;
    egui::ComboBox::from_label("Analysis type")
        .selected_text(current.label())
        .show_ui(ui, |ui: &mut Ui| {
            for mode in [InsightsMode::Correlation, InsightsMode::TopCategories] {
                if ui.selectable_label(current == mode, mode.label()).clicked() {
                    state.insights_mode = mode;
                }
            }
        });
    ui.add_space(8.0);

    match state.insights_mode {
        InsightsMode::Correlation => correlation_heatmap(ui, table),
        InsightsMode::TopCategories => top_categories(ui, state, table),
    }
}

// ---------------------------------------------------------------------------
// Correlation heatmap
// ---------------------------------------------------------------------------

fn correlation_heatmap(ui: &mut Ui, table: &DataTable) {
    ui.heading("🔥 Correlation Heatmap");

    let Some((names, matrix)) = stats::correlation_matrix(table) else {
        ui::warning_banner(ui, "Not enough numeric data for correlation analysis.");
        return;
    };

    let k = names.len();
    let x_names = names.clone();
    let y_names = names.clone();

    Plot::new("correlation_heatmap")
        .data_aspect(1.0)
        .x_axis_formatter(move |mark, _range| {
            axis_label(&x_names, mark.value)
        })
        .y_axis_formatter(move |mark, _range| {
            // rows are drawn top-down
            axis_label_rev(&y_names, mark.value)
        })
        .allow_boxed_zoom(false)
        .allow_scroll(false)
        .show_grid(false)
        .show(ui, |plot_ui| {
            for (i, row) in matrix.iter().enumerate() {
                for (j, &r) in row.iter().enumerate() {
                    let x = j as f64;
                    let y = (k - 1 - i) as f64;
                    let cell: PlotPoints = vec![
                        [x, y],
                        [x + 1.0, y],
                        [x + 1.0, y + 1.0],
                        [x, y + 1.0],
                    ]
                    .into();
                    plot_ui.polygon(
                        Polygon::new(cell)
                            .fill_color(color::diverging_color(r))
                            .stroke(Stroke::new(1.0, Color32::from_gray(30))),
                    );

                    let label = if r.is_finite() {
                        format!("{r:.2}")
                    } else {
                        "–".to_string()
                    };
                    plot_ui.text(Text::new(
                        PlotPoint::new(x + 0.5, y + 0.5),
                        RichText::new(label)
                            .color(color::annotation_color(r))
                            .size(12.0),
                    ));
                }
            }
        });
}

/// Map a grid mark at a cell center onto its column name.
fn axis_label(names: &[String], value: f64) -> String {
    let idx = (value - 0.5).round();
    if (value - 0.5 - idx).abs() > 0.01 || idx < 0.0 {
        return String::new();
    }
    names.get(idx as usize).cloned().unwrap_or_default()
}

fn axis_label_rev(names: &[String], value: f64) -> String {
    let idx = (value - 0.5).round();
    if (value - 0.5 - idx).abs() > 0.01 || idx < 0.0 {
        return String::new();
    }
    let i = idx as usize;
    if i < names.len() {
        names[names.len() - 1 - i].clone()
    } else {
        String::new()
    }
}

// ---------------------------------------------------------------------------
// Top categories bar chart
// ---------------------------------------------------------------------------

fn top_categories(ui: &mut Ui, state: &mut AppState, table: &DataTable) {
    ui.heading("🏆 Top Categories");

    let categorical = table.categorical_column_names();
    if categorical.is_empty() {
        ui::warning_banner(ui, "No categorical columns found in the dataset.");
        return;
    }

    if !state
        .category_column
        .as_ref()
        .is_some_and(|c| categorical.contains(c))
    {
        state.category_column = categorical.first().cloned();
    }
    let current = state.category_column.clone().unwrap_or_default();

    egui::ComboBox::from_label("Categorical column")
        .selected_text(&current)
        .show_ui(ui, |ui: &mut Ui| {
            for col in &categorical {
                if ui.selectable_label(current == *col, col).clicked() {
                    state.category_column = Some(col.clone());
                }
            }
        });

    let Some(column) = table.column(&current) else {
        return;
    };
    let counts = stats::value_counts(&column.values);
    if counts.is_empty() {
        ui::warning_banner(ui, "Column has no values to count.");
        return;
    }

    let palette = color::generate_palette(counts.len());
    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, (label, count))| {
            Bar::new(i as f64, *count as f64)
                .width(0.8)
                .name(label)
                .fill(palette[i])
        })
        .collect();

    let labels: Vec<String> = counts.iter().map(|(l, _)| l.clone()).collect();

    Plot::new("top_categories")
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 0.01 || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .y_axis_label("Count")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name(&current));
        });
}
