// src/ui/state_breakdown.rs
use eframe::egui::{self, Align2};
use egui_plot::{Bar, BarChart, Plot, PlotPoint, Text};

use crate::data::{derive_highlights, ProfitSummary};
use crate::state::scene::StateBreakdownState;
use crate::ui::annotations::Callout;
use crate::ui::{LOSS_COLOR, PROFIT_COLOR};

/// Scene 1: per-state category bars behind a state selector. The selector
/// lists every distinct state sorted ascending; the chart re-derives from
/// the nested grouping whenever the selection changes.
pub fn show_state_breakdown(
    ui: &mut egui::Ui,
    scene: &mut StateBreakdownState,
    summary: &ProfitSummary,
) {
    let states = summary.by_state.sorted_keys();

    ui.horizontal(|ui| {
        ui.label("State:");
        let selected_label = scene
            .selected_state
            .as_deref()
            .unwrap_or("(no data)")
            .to_string();
        egui::ComboBox::from_id_source("state_select")
            .selected_text(selected_label)
            .show_ui(ui, |ui| {
                for state in &states {
                    ui.selectable_value(&mut scene.selected_state, Some(state.clone()), state.as_str());
                }
            });
    });

    let Some(selected) = scene.selected_state.clone() else {
        ui.add_space(8.0);
        ui.label("No states in the dataset.");
        return;
    };

    ui.add_space(4.0);
    ui.heading(format!("Profit by Category in {selected}"));
    ui.add_space(4.0);

    let entries = summary.categories_for(&selected);
    if entries.is_empty() {
        // Absent grouping key: placeholder chart, not a failure.
        Plot::new("state_breakdown_empty")
            .height(420.0)
            .allow_zoom(false)
            .allow_drag(false)
            .show_background(false)
            .include_y(0.0)
            .show(ui, |_plot_ui| {});
        ui.label(format!("No recorded sales for {selected}."));
        return;
    }

    let highlights = derive_highlights(&entries);

    let plot = Plot::new("state_breakdown")
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
                    .fill(if *profit >= 0.0 { PROFIT_COLOR } else { LOSS_COLOR })
            })
            .collect();
        plot_ui.bar_chart(BarChart::new(bars));

        // Category labels along the baseline, on the empty side of the bar.
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

        for highlight in &highlights {
            if let Some(position) = entries.iter().position(|(c, _)| c == &highlight.category) {
                Callout::from_highlight(highlight, position as f64 + 0.4).draw(plot_ui);
            }
        }
    });
}
