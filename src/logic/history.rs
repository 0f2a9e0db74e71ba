//! Classification History
//!
//! Append-ordered log of classification results, most recent first. Unbounded
//! at this layer; the shell truncates for display via `most_recent`.

use std::collections::{BTreeMap, VecDeque};

use crate::logic::classify::{ClassificationResult, WasteCategory};

#[derive(Debug, Clone, Default)]
pub struct ClassificationHistory {
    entries: VecDeque<ClassificationResult>,
}

impl ClassificationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a completed result. Stored results are never mutated.
    pub fn record(&mut self, result: ClassificationResult) {
        log::debug!(
            "Recorded classification {} -> {}",
            result.source_image,
            result.category
        );
        self.entries.push_front(result);
    }

    /// The `min(n, len)` newest results, newest first
    pub fn most_recent(&self, n: usize) -> Vec<ClassificationResult> {
        self.entries.iter().take(n).cloned().collect()
    }

    /// The single newest result, if any
    pub fn latest(&self) -> Option<&ClassificationResult> {
        self.entries.front()
    }

    /// Count per winning category over the full history. Categories never
    /// observed are omitted from the map.
    pub fn category_counts(&self) -> BTreeMap<WasteCategory, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.category).or_insert(0) += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn result_for(image: &str, winner_idx: usize) -> ClassificationResult {
        let mut scores = [10.0; 6];
        scores[winner_idx] = 50.0;
        ClassificationResult::from_scores(image, scores)
    }

    #[test]
    fn most_recent_returns_newest_first() {
        let mut history = ClassificationHistory::new();
        let r1 = result_for("first.png", 0);
        let r2 = result_for("second.png", 1);
        history.record(r1.clone());
        history.record(r2.clone());

        let one = history.most_recent(1);
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].id, r2.id);

        let two = history.most_recent(2);
        assert_eq!(two[0].id, r2.id);
        assert_eq!(two[1].id, r1.id);
    }

    #[test]
    fn most_recent_caps_at_history_size() {
        let mut history = ClassificationHistory::new();
        history.record(result_for("only.png", 2));
        assert_eq!(history.most_recent(10).len(), 1);
    }

    #[test]
    fn category_counts_omit_unobserved_categories() {
        let mut history = ClassificationHistory::new();
        history.record(result_for("a.png", 4));
        history.record(result_for("b.png", 4));
        history.record(result_for("c.png", 1));

        let counts = history.category_counts();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[&WasteCategory::Plastic], 2);
        assert_eq!(counts[&WasteCategory::Glass], 1);
        assert!(!counts.contains_key(&WasteCategory::Trash));
    }

    #[test]
    fn recording_does_not_disturb_stored_results() {
        let mut history = ClassificationHistory::new();
        let r1 = result_for("keep.png", 3);
        let confidence = r1.confidence;
        history.record(r1);
        history.record(result_for("new.png", 5));

        let stored = &history.most_recent(2)[1];
        assert_eq!(stored.source_image, "keep.png");
        assert_eq!(stored.confidence, confidence);
    }
}
