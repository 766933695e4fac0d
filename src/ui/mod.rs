// src/ui/mod.rs
use eframe::egui::Color32;

pub mod annotations;
pub mod category_totals;
pub mod discount_scatter;
pub mod state_breakdown;

/// Bar fill for positive profit totals.
pub const PROFIT_COLOR: Color32 = Color32::from_rgb(0, 123, 255);
/// Bar fill for losses.
pub const LOSS_COLOR: Color32 = Color32::from_rgb(220, 53, 69);

/// Fixed finite palette for the scatter plot, indexed by the position of
/// a category in first-seen order.
pub fn category_color(index: usize) -> Color32 {
    const PALETTE: [Color32; 3] = [
        Color32::from_rgb(70, 130, 180),
        Color32::from_rgb(218, 112, 214),
        Color32::from_rgb(240, 128, 128),
    ];
    PALETTE[index % PALETTE.len()]
}

/// Money formatting used by bar labels and tooltips. The sign rides
/// inside the dollar, matching the annotation labels.
pub fn format_profit(value: f64) -> String {
    format!("${value:.2}")
}
