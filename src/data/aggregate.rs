// src/data/aggregate.rs
use std::collections::HashMap;

use crate::data::record::Record;

/// Profit totals keyed by one categorical dimension. Iteration follows
/// first-seen order of the keys; consumers that need a different display
/// order (Scene 1's alphabetical state list) sort explicitly.
#[derive(Debug, Clone, Default)]
pub struct GroupedProfit {
    totals: HashMap<String, f64>,
    order: Vec<String>,
}

impl GroupedProfit {
    pub fn add(&mut self, key: &str, profit: f64) {
        match self.totals.get_mut(key) {
            Some(total) => *total += profit,
            None => {
                self.totals.insert(key.to_string(), profit);
                self.order.push(key.to_string());
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.totals.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// (key, total) pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.order
            .iter()
            .map(|key| (key.as_str(), self.totals[key]))
    }

    /// Keys sorted ascending, lexicographic.
    pub fn sorted_keys(&self) -> Vec<String> {
        let mut keys = self.order.clone();
        keys.sort();
        keys
    }

    /// Position of a key in first-seen order.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.order.iter().position(|k| k == key)
    }

    pub fn total(&self) -> f64 {
        self.totals.values().sum()
    }
}

/// The three derived groupings every scene draws from. Built in one pass
/// over the records and read-only afterwards; the raw record set never
/// changes within a session, so these are never recomputed.
#[derive(Debug, Default)]
pub struct ProfitSummary {
    pub by_state: GroupedProfit,
    pub by_category: GroupedProfit,
    pub by_state_category: HashMap<String, GroupedProfit>,
}

impl ProfitSummary {
    pub fn from_records(records: &[Record]) -> Self {
        let mut summary = Self::default();
        for record in records {
            summary.by_state.add(&record.state, record.profit);
            summary.by_category.add(&record.category, record.profit);
            summary
                .by_state_category
                .entry(record.state.clone())
                .or_default()
                .add(&record.category, record.profit);
        }
        summary
    }

    /// Per-category totals for one state, in first-seen category order.
    /// A state absent from the grouping yields an empty list; the view
    /// renders a placeholder chart for it rather than failing.
    pub fn categories_for(&self, state: &str) -> Vec<(String, f64)> {
        self.by_state_category
            .get(state)
            .map(|grouping| {
                grouping
                    .iter()
                    .map(|(category, profit)| (category.to_string(), profit))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(state: &str, category: &str, profit: f64) -> Record {
        Record {
            state: state.to_string(),
            category: category.to_string(),
            product_name: format!("{category} item"),
            sales: profit.abs() * 4.0,
            quantity: 1.0,
            discount: 0.0,
            profit,
        }
    }

    fn spec_example() -> Vec<Record> {
        vec![
            record("TX", "Tech", 100.0),
            record("TX", "Furn", -20.0),
            record("CA", "Tech", 50.0),
        ]
    }

    #[test]
    fn groups_profit_by_state_category_and_pair() {
        let summary = ProfitSummary::from_records(&spec_example());

        assert_eq!(summary.by_state.get("TX"), Some(80.0));
        assert_eq!(summary.by_state.get("CA"), Some(50.0));
        assert_eq!(summary.by_category.get("Tech"), Some(150.0));
        assert_eq!(summary.by_category.get("Furn"), Some(-20.0));

        let tx = &summary.by_state_category["TX"];
        assert_eq!(tx.get("Tech"), Some(100.0));
        assert_eq!(tx.get("Furn"), Some(-20.0));
        let ca = &summary.by_state_category["CA"];
        assert_eq!(ca.get("Tech"), Some(50.0));
        assert_eq!(ca.get("Furn"), None);
    }

    #[test]
    fn groupings_partition_the_same_total() {
        let records = vec![
            record("TX", "Tech", 12.5),
            record("CA", "Office", -3.25),
            record("NY", "Furn", 40.0),
            record("TX", "Office", 7.75),
            record("CA", "Tech", -18.0),
        ];
        let summary = ProfitSummary::from_records(&records);
        let total: f64 = records.iter().map(|r| r.profit).sum();

        assert!((summary.by_state.total() - total).abs() < 1e-9);
        assert!((summary.by_category.total() - total).abs() < 1e-9);

        // Each state's nested grouping sums back to that state's total.
        for (state, state_total) in summary.by_state.iter() {
            let nested = summary.by_state_category[state].total();
            assert!((nested - state_total).abs() < 1e-9);
        }
    }

    #[test]
    fn aggregation_is_order_independent() {
        let mut records = vec![
            record("TX", "Tech", 12.5),
            record("CA", "Office", -3.25),
            record("NY", "Furn", 40.0),
            record("TX", "Office", 7.75),
            record("CA", "Tech", -18.0),
        ];
        let forward = ProfitSummary::from_records(&records);
        records.reverse();
        let reversed = ProfitSummary::from_records(&records);

        for (state, total) in forward.by_state.iter() {
            let other = reversed.by_state.get(state).unwrap();
            assert!((other - total).abs() < 1e-9);
        }
        for (category, total) in forward.by_category.iter() {
            let other = reversed.by_category.get(category).unwrap();
            assert!((other - total).abs() < 1e-9);
        }
    }

    #[test]
    fn empty_input_yields_empty_groupings() {
        let summary = ProfitSummary::from_records(&[]);
        assert!(summary.by_state.is_empty());
        assert!(summary.by_category.is_empty());
        assert!(summary.by_state_category.is_empty());
        assert!(summary.categories_for("TX").is_empty());
    }

    #[test]
    fn iteration_follows_first_seen_order() {
        let summary = ProfitSummary::from_records(&spec_example());
        let categories: Vec<&str> = summary.by_category.iter().map(|(k, _)| k).collect();
        assert_eq!(categories, vec!["Tech", "Furn"]);
    }

    #[test]
    fn sorted_keys_are_ascending() {
        let summary = ProfitSummary::from_records(&spec_example());
        assert_eq!(summary.by_state.sorted_keys(), vec!["CA", "TX"]);
    }

    #[test]
    fn missing_state_yields_empty_category_list() {
        let summary = ProfitSummary::from_records(&spec_example());
        assert!(summary.categories_for("WA").is_empty());
    }
}
