// src/state/mod.rs
use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::data::{self, ProfitSummary, Record};
use crate::state::scene::SceneController;

pub mod scene;

// Core application state: the session context object. Owns the raw
// records, the derived groupings, and the scene controller; scene views
// borrow it, they never own it.
#[derive(Debug)]
pub struct AppState {
    pub records: Vec<Record>,
    pub summary: ProfitSummary,
    pub skipped_rows: usize,
    pub controller: SceneController,
}

impl AppState {
    /// Loads the dataset once and derives everything the scenes need. A
    /// load failure propagates out; no partial state is constructed.
    pub fn load(path: &Path) -> Result<Self> {
        let report = data::load_records(path)?;
        Ok(Self::from_report(report))
    }

    pub fn from_report(report: data::LoadReport) -> Self {
        let summary = ProfitSummary::from_records(&report.records);
        info!(
            states = summary.by_state.len(),
            categories = summary.by_category.len(),
            total_profit = summary.by_state.total(),
            "profit groupings derived"
        );
        let controller = SceneController::new(&summary);
        Self {
            records: report.records,
            summary,
            skipped_rows: report.skipped_rows,
            controller,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LoadReport;

    #[test]
    fn empty_report_builds_a_usable_session() {
        let state = AppState::from_report(LoadReport::default());
        assert!(state.records.is_empty());
        assert!(state.summary.by_state.is_empty());
        assert_eq!(state.controller.index(), 0);
    }
}
