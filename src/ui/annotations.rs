// src/ui/annotations.rs
use eframe::egui::{Align2, Color32, RichText};
use egui_plot::{PlotPoint, PlotUi, Text};

use crate::data::Highlight;

/// A textual callout anchored at a data coordinate. Scenes 2 and 3 carry
/// fixed callouts; Scene 1 derives its callouts from the highlight pass.
#[derive(Debug, Clone)]
pub struct Callout {
    pub title: String,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub anchor: Align2,
}

impl Callout {
    pub fn new(title: &str, label: &str, x: f64, y: f64) -> Self {
        Self {
            title: title.to_string(),
            label: label.to_string(),
            x,
            y,
            anchor: Align2::LEFT_BOTTOM,
        }
    }

    pub fn anchor(mut self, anchor: Align2) -> Self {
        self.anchor = anchor;
        self
    }

    /// Builds a callout at a bar's tip from a derived highlight.
    pub fn from_highlight(highlight: &Highlight, x: f64) -> Self {
        let anchor = if highlight.profit < 0.0 {
            Align2::LEFT_TOP
        } else {
            Align2::LEFT_BOTTOM
        };
        Self::new(&highlight.title(), &highlight.label(), x, highlight.profit).anchor(anchor)
    }

    pub fn draw(&self, plot_ui: &mut PlotUi) {
        let body = format!("{}\n{}", self.title, self.label);
        plot_ui.text(
            Text::new(
                PlotPoint::new(self.x, self.y),
                RichText::new(body).strong().color(Color32::DARK_GRAY),
            )
            .anchor(self.anchor)
            .name(self.title.clone()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Highlight, HighlightKind};

    #[test]
    fn highlight_callouts_sit_at_the_bar_tip() {
        let callout = Callout::from_highlight(
            &Highlight {
                kind: HighlightKind::HighestProfit,
                category: "Tech".to_string(),
                profit: 50.0,
            },
            2.0,
        );
        assert_eq!(callout.x, 2.0);
        assert_eq!(callout.y, 50.0);
        assert_eq!(callout.title, "Highest Profit: Tech");
        assert_eq!(callout.label, "Highest profit: $50.00");
        assert_eq!(callout.anchor, Align2::LEFT_BOTTOM);
    }

    #[test]
    fn loss_callouts_hang_below_the_bar() {
        let callout = Callout::from_highlight(
            &Highlight {
                kind: HighlightKind::MajorLoss,
                category: "Furn".to_string(),
                profit: -20.0,
            },
            0.0,
        );
        assert_eq!(callout.anchor, Align2::LEFT_TOP);
        assert_eq!(callout.label, "Lowest profit: $-20.00");
    }
}
