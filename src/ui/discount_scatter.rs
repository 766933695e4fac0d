// src/ui/discount_scatter.rs
use eframe::egui;
use egui_plot::{Legend, Plot, Points};

use crate::data::Record;
use crate::ui::annotations::Callout;
use crate::ui::{category_color, format_profit};

// Hover radius as a fraction of each axis span.
const PICK_RADIUS: f64 = 0.03;

/// Scene 3: every record verbatim as one point, discount against profit,
/// colored by a fixed palette over the distinct categories in first-seen
/// order. Hovering a point shows its product, category, profit, and
/// discount.
pub fn show_discount_scatter(ui: &mut egui::Ui, records: &[Record]) {
    ui.heading("Profit vs. Discount Analysis");
    ui.add_space(4.0);

    if records.is_empty() {
        ui.label("No records in the dataset.");
        return;
    }

    let categories = distinct_categories(records);

    let plot = Plot::new("discount_scatter")
        .height(420.0)
        .allow_zoom(false)
        .allow_drag(false)
        .show_background(false)
        .legend(Legend::default())
        .include_x(0.0)
        .include_x(0.55)
        .include_y(-1000.0)
        .include_y(400.0);

    let response = plot.show(ui, |plot_ui| {
        for (index, category) in categories.iter().enumerate() {
            let points: Vec<[f64; 2]> = records
                .iter()
                .filter(|r| &r.category == category)
                .map(|r| [r.discount, r.profit])
                .collect();
            plot_ui.points(
                Points::new(points)
                    .radius(2.5)
                    .color(category_color(index))
                    .name(category),
            );
        }

        for callout in fixed_callouts() {
            callout.draw(plot_ui);
        }

        plot_ui
            .pointer_coordinate()
            .and_then(|pointer| nearest_record(records, pointer.x, pointer.y))
            .cloned()
    });

    if let Some(record) = response.inner {
        egui::show_tooltip_at_pointer(ui.ctx(), egui::Id::new("scatter_tooltip"), |ui| {
            ui.label(format!("Product: {}", record.product_name));
            ui.label(format!("Category: {}", record.category));
            ui.label(format!("Profit: {}", format_profit(record.profit)));
            ui.label(format!("Discount: {:.0}%", record.discount * 100.0));
        });
    }
}

/// The story's fixed Scene 3 callouts at fixed data coordinates.
fn fixed_callouts() -> Vec<Callout> {
    vec![
        Callout::new(
            "Discount Impact",
            "High discounts often lead to significant losses.",
            0.5,
            -1000.0,
        ),
        Callout::new(
            "Zero Discount Sales",
            "The majority of sales occur with no discount.",
            0.02,
            400.0,
        ),
    ]
}

/// Distinct categories in first-seen order; indexes into the palette.
fn distinct_categories(records: &[Record]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for record in records {
        if !categories.iter().any(|c| c == &record.category) {
            categories.push(record.category.clone());
        }
    }
    categories
}

/// Picks the record closest to the pointer in axis-normalized space, or
/// none when every point is further than the pick radius.
fn nearest_record(records: &[Record], x: f64, y: f64) -> Option<&Record> {
    let x_span = span(records.iter().map(|r| r.discount));
    let y_span = span(records.iter().map(|r| r.profit));

    records
        .iter()
        .map(|record| {
            let dx = (record.discount - x) / x_span;
            let dy = (record.profit - y) / y_span;
            (record, dx * dx + dy * dy)
        })
        .filter(|(_, d2)| *d2 <= PICK_RADIUS * PICK_RADIUS)
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(record, _)| record)
}

fn span(values: impl Iterator<Item = f64> + Clone) -> f64 {
    let min = values.clone().fold(f64::INFINITY, f64::min);
    let max = values.fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    if span > 0.0 {
        span
    } else {
        1.0
    }
}
