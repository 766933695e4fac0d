// src/ui/category_totals.rs
use eframe::egui::{self, Align2};
use egui_plot::{Bar, BarChart, Plot, PlotPoint, Text};

use crate::data::ProfitSummary;
use crate::ui::annotations::Callout;
use crate::ui::PROFIT_COLOR;

/// Scene 2: nationwide profit totals per category, in first-seen order.
/// Carries no scene-local state; it is a pure projection of `by_category`.
pub fn show_category_totals(ui: &mut egui::Ui, summary: &ProfitSummary) {
    ui.heading("Nation Wide Total Profit by Category");
    ui.add_space(4.0);

    if summary.by_category.is_empty() {
        ui.label("No categories in the dataset.");
        return;
    }

    let entries: Vec<(String, f64)> = summary
        .by_category
        .iter()
        .map(|(category, profit)| (category.to_string(), profit))
        .collect();

    let plot = Plot::new("category_totals")
        .height(420.0)
        .allow_zoom(false)
        .allow_drag(false)
        .show_background(false)
        .show_axes([false, true])
        .include_y(0.0)
        .include_x(-0.7)
        .include_x(entries.len() as f64 - 0.3);

    plot.show(ui, |plot_ui| {
        let bars: Vec<Bar> = entries
            .iter()
            .enumerate()
            .map(|(i, (category, profit))| {
                Bar::new(i as f64, *profit)
                    .width(0.6)
                    .name(category)
                    .fill(PROFIT_COLOR)
            })
            .collect();
        plot_ui.bar_chart(BarChart::new(bars));

        for (i, (category, profit)) in entries.iter().enumerate() {
            let anchor = if *profit >= 0.0 {
                Align2::CENTER_TOP
            } else {
                Align2::CENTER_BOTTOM
            };
            plot_ui.text(
                Text::new(PlotPoint::new(i as f64, 0.0), category.clone()).anchor(anchor),
            );
        }

        for callout in fixed_callouts(summary) {
            callout.draw(plot_ui);
        }
    });
}

/// The story's fixed Scene 2 callouts, emitted only when the category they
/// point at is actually present.
fn fixed_callouts(summary: &ProfitSummary) -> Vec<Callout> {
    let mut callouts = Vec::new();

    if let (Some(profit), Some(position)) = (
        summary.by_category.get("Technology"),
        summary.by_category.position("Technology"),
    ) {
        callouts.push(
            Callout::new(
                "Highest Profit",
                "Technology contributes the most to overall profit.",
                position as f64 + 0.4,
                profit,
            )
            .anchor(Align2::LEFT_BOTTOM),
        );
    }

    if let (Some(profit), Some(position)) = (
        summary.by_category.get("Furniture"),
        summary.by_category.position("Furniture"),
    ) {
        callouts.push(
            Callout::new(
                "Lower Profit",
                "Furniture has a much lower profit margin.",
                position as f64 + 0.4,
                profit,
            )
            .anchor(Align2::LEFT_BOTTOM),
        );
    }

    callouts
}
