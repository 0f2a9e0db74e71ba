//! Classification Simulator
//!
//! Stand-in for the real vision model. Draws a Dirichlet(0.5) sample over the
//! six categories and scales it to percent, which gives skewed, peaked
//! confidence spreads instead of a flat uniform split.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::logic::error::CoreResult;

use super::category::CATEGORY_COUNT;
use super::image::ImageUpload;
use super::result::ClassificationResult;
use super::WasteClassifier;

/// One Gamma(0.5, 1) draw. For shape 1/2 the gamma is exactly half a
/// chi-squared with one degree of freedom, i.e. Normal(0,1)^2 / 2, so a single
/// Box-Muller normal draw suffices.
fn sample_gamma_half(rng: &mut impl Rng) -> f64 {
    let u1: f64 = rng.gen::<f64>().max(f64::MIN_POSITIVE);
    let u2: f64 = rng.gen();
    let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
    z * z / 2.0
}

/// Draw a percent-scaled Dirichlet(0.5) sample: independent Gamma(0.5) draws
/// normalized to sum to 100. Concentration below 1.0 piles mass on few
/// categories, which is what a confident classifier's output looks like.
pub fn sample_confidences(rng: &mut impl Rng) -> [f64; CATEGORY_COUNT] {
    let mut scores = [0.0; CATEGORY_COUNT];
    for s in &mut scores {
        *s = sample_gamma_half(rng);
    }

    let sum: f64 = scores.iter().sum();
    if sum <= 0.0 {
        // All-zero draw is measure-zero but would divide by zero; fall back to
        // the uniform split.
        return [100.0 / CATEGORY_COUNT as f64; CATEGORY_COUNT];
    }

    for s in &mut scores {
        *s *= 100.0 / sum;
    }
    scores
}

/// Simulate one classification of the named input
pub fn simulate(image_identifier: &str, rng: &mut impl Rng) -> ClassificationResult {
    ClassificationResult::from_scores(image_identifier, sample_confidences(rng))
}

// ============================================================================
// CLASSIFIER IMPLEMENTATION
// ============================================================================

/// Deterministic-simulation classifier. Ignores pixel content entirely.
pub struct SimulatedClassifier {
    rng: StdRng,
}

impl SimulatedClassifier {
    /// Entropy-seeded simulator for live sessions
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed-seed simulator for demos and tests
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SimulatedClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl WasteClassifier for SimulatedClassifier {
    fn classify(&mut self, upload: &ImageUpload) -> CoreResult<ClassificationResult> {
        let result = simulate(upload.filename(), &mut self.rng);
        log::debug!(
            "Simulated classification of {}: {} at {:.1}%",
            upload.filename(),
            result.category,
            result.confidence
        );
        Ok(result)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::classify::category::WasteCategory;

    #[test]
    fn scores_sum_to_100_within_tolerance() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let scores = sample_confidences(&mut rng);
            let sum: f64 = scores.iter().sum();
            assert!((sum - 100.0).abs() < 1e-6, "sum {sum}");
            assert!(scores.iter().all(|&s| s >= 0.0));
        }
    }

    #[test]
    fn winning_category_is_argmax() {
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..100 {
            let result = simulate("sample.png", &mut rng);
            let max = result
                .all_scores
                .iter()
                .map(|(_, s)| *s)
                .fold(f64::NEG_INFINITY, f64::max);
            assert_eq!(result.confidence, max);
            assert_eq!(result.score_for(result.category), max);
            assert!(result.confidence > 0.0 && result.confidence <= 100.0);
        }
    }

    #[test]
    fn same_seed_yields_identical_results() {
        let a = simulate("test.png", &mut StdRng::seed_from_u64(7));
        let b = simulate("test.png", &mut StdRng::seed_from_u64(7));

        assert_eq!(a.category, b.category);
        assert_eq!(a.confidence, b.confidence);
        for (x, y) in a.all_scores.iter().zip(&b.all_scores) {
            assert_eq!(x, y);
        }
    }

    #[test]
    fn low_concentration_skews_the_distribution() {
        // With alpha = 0.5 the winner holds well over the uniform share of
        // ~16.7% in nearly every draw.
        let mut rng = StdRng::seed_from_u64(13);
        let mut peaked = 0;
        for _ in 0..200 {
            let result = simulate("sample.png", &mut rng);
            if result.confidence > 25.0 {
                peaked += 1;
            }
        }
        assert!(peaked > 100, "only {peaked}/200 draws peaked over 25%");
    }

    #[test]
    fn classifier_trait_produces_valid_results() {
        let mut classifier = SimulatedClassifier::from_seed(42);
        let upload = ImageUpload::new(
            "bottle.png",
            vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 0],
        )
        .unwrap();

        let result = classifier.classify(&upload).unwrap();
        assert_eq!(result.source_image, "bottle.png");
        assert!(WasteCategory::ALL.contains(&result.category));
    }
}
