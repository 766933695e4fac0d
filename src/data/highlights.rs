// src/data/highlights.rs

/// What a derived annotation is calling attention to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightKind {
    HighestProfit,
    MajorLoss,
}

/// A data-derived annotation for one bar of the per-state category chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    pub kind: HighlightKind,
    pub category: String,
    pub profit: f64,
}

impl Highlight {
    pub fn title(&self) -> String {
        match self.kind {
            HighlightKind::HighestProfit => format!("Highest Profit: {}", self.category),
            HighlightKind::MajorLoss => format!("Major Loss: {}", self.category),
        }
    }

    pub fn label(&self) -> String {
        match self.kind {
            HighlightKind::HighestProfit => format!("Highest profit: ${:.2}", self.profit),
            HighlightKind::MajorLoss => format!("Lowest profit: ${:.2}", self.profit),
        }
    }
}

/// Derives the annotations for a (category, profit) list: the top entry by
/// profit is always highlighted, the bottom entry only when its total is
/// strictly negative. The sort is stable, so a tie at the top resolves to
/// the entry that appeared first in the input.
pub fn derive_highlights(entries: &[(String, f64)]) -> Vec<Highlight> {
    if entries.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<&(String, f64)> = entries.iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut highlights = Vec::new();
    let top = ranked[0];
    highlights.push(Highlight {
        kind: HighlightKind::HighestProfit,
        category: top.0.clone(),
        profit: top.1,
    });

    let bottom = ranked[ranked.len() - 1];
    if bottom.1 < 0.0 {
        highlights.push(Highlight {
            kind: HighlightKind::MajorLoss,
            category: bottom.0.clone(),
            profit: bottom.1,
        });
    }

    highlights
}
