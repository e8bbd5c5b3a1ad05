use crate::history::record::DisposalRecord;
use std::collections::{HashMap, HashSet};

/// Aggregates shown above the history table. Recomputed on every view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySummary {
    pub total_entries: usize,
    pub unique_locations: usize,
    pub waste_categories: usize,
    /// Most frequent first, ties by label.
    pub waste_counts: Vec<(String, usize)>,
    pub records: Vec<DisposalRecord>,
}

impl HistorySummary {
    pub fn from_records(records: Vec<DisposalRecord>) -> Self {
        let unique_locations = records
            .iter()
            .map(|record| record.location.as_str())
            .collect::<HashSet<_>>()
            .len();

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for record in &records {
            *counts.entry(record.waste_type.as_str()).or_default() += 1;
        }

        let mut waste_counts: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(waste_type, count)| (waste_type.to_string(), count))
            .collect();
        waste_counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Self {
            total_entries: records.len(),
            unique_locations,
            waste_categories: waste_counts.len(),
            waste_counts,
            records,
        }
    }
}
