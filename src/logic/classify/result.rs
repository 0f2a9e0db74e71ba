//! Classification Result
//!
//! Immutable record of one completed classification. The constructor is the
//! only way to build one, so the argmax/confidence invariant always holds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::{WasteCategory, CATEGORY_COUNT};

/// One completed classification. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub id: Uuid,
    /// Opaque identifier of the input (upload filename)
    pub source_image: String,
    /// Winning category: argmax over `all_scores`
    pub category: WasteCategory,
    /// The winning category's score, in (0, 100]
    pub confidence: f64,
    /// Category -> score in canonical category order; sums to 100
    pub all_scores: Vec<(WasteCategory, f64)>,
    pub timestamp: DateTime<Utc>,
}

impl ClassificationResult {
    /// Build a result from a percent-scaled score vector (canonical category
    /// order). Ties on the argmax go to the lowest category index.
    pub fn from_scores(source_image: &str, scores: [f64; CATEGORY_COUNT]) -> Self {
        let mut winner = 0;
        for (i, &score) in scores.iter().enumerate() {
            if score > scores[winner] {
                winner = i;
            }
        }

        Self {
            id: Uuid::new_v4(),
            source_image: source_image.to_string(),
            category: WasteCategory::ALL[winner],
            confidence: scores[winner],
            all_scores: WasteCategory::ALL.iter().copied().zip(scores).collect(),
            timestamp: Utc::now(),
        }
    }

    /// Score for one category
    pub fn score_for(&self, category: WasteCategory) -> f64 {
        self.all_scores[category.index()].1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_and_confidence_are_consistent() {
        let result =
            ClassificationResult::from_scores("a.png", [5.0, 10.0, 50.0, 15.0, 12.0, 8.0]);
        assert_eq!(result.category, WasteCategory::Metal);
        assert_eq!(result.confidence, 50.0);
        assert_eq!(result.score_for(WasteCategory::Metal), 50.0);
    }

    #[test]
    fn exact_ties_go_to_the_lowest_index() {
        let result =
            ClassificationResult::from_scores("b.png", [30.0, 30.0, 10.0, 10.0, 10.0, 10.0]);
        assert_eq!(result.category, WasteCategory::Cardboard);
    }

    #[test]
    fn all_scores_follow_canonical_order() {
        let result = ClassificationResult::from_scores("c.png", [1.0, 2.0, 3.0, 4.0, 5.0, 85.0]);
        for (i, (cat, _)) in result.all_scores.iter().enumerate() {
            assert_eq!(cat.index(), i);
        }
    }
}
