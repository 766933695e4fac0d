// src/data/mod.rs
pub mod aggregate;
pub mod highlights;
pub mod loader;
pub mod record;

// Re-export commonly used types
pub use aggregate::{GroupedProfit, ProfitSummary};
pub use highlights::{derive_highlights, Highlight, HighlightKind};
pub use loader::{load_records, LoadReport, DATA_PATH};
pub use record::Record;
