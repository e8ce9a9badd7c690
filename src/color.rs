use eframe::egui::Color32;
use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Diverging colormap for the correlation heatmap
// ---------------------------------------------------------------------------

/// Map a correlation value in [-1, 1] onto a fixed blue → white → red scale.
/// NaN (undefined correlation) renders grey.
pub fn diverging_color(r: f64) -> Color32 {
    if !r.is_finite() {
        return Color32::GRAY;
    }
    let r = r.clamp(-1.0, 1.0) as f32;

    let cold: LinSrgb = Srgb::new(0.23, 0.30, 0.75).into_linear();
    let warm: LinSrgb = Srgb::new(0.71, 0.02, 0.15).into_linear();
    let white: LinSrgb = Srgb::new(0.97, 0.97, 0.97).into_linear();

    let mixed = if r < 0.0 {
        white.mix(cold, -r)
    } else {
        white.mix(warm, r)
    };
    let rgb: Srgb = Srgb::from_linear(mixed);
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Text colour that stays readable on top of a heatmap cell.
pub fn annotation_color(r: f64) -> Color32 {
    if r.is_finite() && r.abs() > 0.6 {
        Color32::WHITE
    } else {
        Color32::BLACK
    }
}
