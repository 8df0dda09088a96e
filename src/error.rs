use thiserror::Error;

/// The two failure kinds the classifier boundary recognizes. Both are
/// caught at that boundary and mapped to a fallback label; neither is
/// fatal to the session.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// The model artifact is missing or could not be deserialized.
    #[error("Error loading ML model: {0}")]
    Load(String),

    /// Vectorization or prediction failed on a loaded bundle.
    #[error("Prediction error: {0}")]
    Inference(String),
}
