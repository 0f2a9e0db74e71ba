//! Error handling
//!
//! All simulated operations in the core are total; errors only arise at the
//! image-upload boundary and at a real-model substitution point. A failed
//! classification must never reach the history.

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Upload is not a supported raster format (PNG/JPEG/WEBP) or is unreadable
    #[error("invalid image upload: {reason}")]
    InvalidImage { reason: String },

    /// A real external model did not answer within its deadline
    #[error("classification timed out after {elapsed_ms} ms")]
    ClassificationTimeout { elapsed_ms: u64 },

    /// Collection / status command addressed to a bin id not in the registry
    #[error("unknown bin id: {id}")]
    UnknownBin { id: String },

    /// No classifier backend is configured
    #[error("classifier unavailable: {0}")]
    ClassifierUnavailable(String),
}

impl CoreError {
    pub fn invalid_image(reason: impl Into<String>) -> Self {
        CoreError::InvalidImage {
            reason: reason.into(),
        }
    }
}
