use thiserror::Error;

/// Errors reported by session operations.
///
/// Every failure is returned as a value; the session never panics on engine
/// failures. Orientation-detection failures are not represented here, they
/// surface as a zero-confidence [`crate::Orientation`] instead.
#[derive(Error, Debug)]
pub enum OcrError {
    /// Engine initialization from model data failed. The session cannot
    /// recognize until a model is successfully loaded.
    #[error("failed to load recognition model: {0}")]
    ModelLoad(String),

    /// The supplied image bytes could not be decoded. The session stays
    /// usable; no image is loaded afterwards.
    #[error("failed to decode image: {0}")]
    ImageDecode(String),

    /// A configuration variable was unknown or its value was rejected.
    #[error("variable error: {0}")]
    Variable(String),
}
