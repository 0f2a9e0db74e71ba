//! Classification Module
//!
//! The classifier is a capability, not a concrete engine: anything that turns
//! an upload into a `ClassificationResult` can sit behind the dashboard. The
//! shipped implementation is the Dirichlet simulator; a real model drops in
//! behind the same trait (selected by configuration, wrapped with its own
//! timeout) without touching the callers.

pub mod category;
pub mod image;
pub mod result;
pub mod simulator;

pub use category::{WasteCategory, CATEGORY_COUNT};
pub use image::{ImageFormat, ImageUpload};
pub use result::ClassificationResult;
pub use simulator::SimulatedClassifier;

use crate::logic::error::CoreResult;

/// Produces a `ClassificationResult` from an image upload.
///
/// Implementations may fail with `InvalidImage` or `ClassificationTimeout`;
/// a failure must propagate to the caller and is never recorded in history.
pub trait WasteClassifier {
    fn classify(&mut self, upload: &ImageUpload) -> CoreResult<ClassificationResult>;
}
