//! The seam in front of the native recognition engine and image library.

use crate::error::OcrError;
use crate::progress::ProgressMonitor;
use crate::types::{Granularity, Rect};

/// Directional confidence scores from the image library's orientation
/// heuristic, computed over the thresholded page image.
///
/// `up_confidence` indicates whether the page is right-side up (positive) or
/// upside down (negative). `left_confidence` indicates whether the page is
/// right-side up after a 90-degree clockwise rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationSignals {
    pub up_confidence: f32,
    pub left_confidence: f32,
}

/// Trait that recognition engine backends must implement.
///
/// Models the stateful native engine handle: an image loaded through
/// [`load_image`](Self::load_image) is copied into the engine's internal
/// representation, and analysis/recognition results are retained there until
/// the next image load or [`clear_image`](Self::clear_image). The session
/// owns the engine exclusively; no concurrent access is supported.
pub trait RecognitionEngine {
    /// Engine version string, embedded in generated hOCR documents.
    fn version(&self) -> &str;

    /// Initialize the engine from in-memory model data for `language`.
    /// Expensive; idempotent across repeated calls.
    fn load_model(&mut self, model: &[u8], language: &str) -> Result<(), OcrError>;

    /// Decode `bytes` into the engine's internal image representation.
    /// The caller's buffer is not referenced after this returns.
    fn load_image(&mut self, bytes: &[u8]) -> Result<(), OcrError>;

    /// Release the current image and any retained results.
    fn clear_image(&mut self);

    /// Read a configuration variable. `None` when the name is unknown.
    fn get_variable(&self, name: &str) -> Option<String>;

    /// Set a configuration variable.
    fn set_variable(&mut self, name: &str, value: &str) -> Result<(), OcrError>;

    /// Run layout analysis on the current image (no character recognition).
    fn analyse_layout(&mut self);

    /// Run the full recognition pass, reporting partial progress through
    /// `monitor`. The engine may stop short of 100 or emit nothing at all;
    /// the session appends the terminal notification.
    fn recognize(&mut self, monitor: &mut ProgressMonitor<'_>);

    /// Recognized page text, read from retained engine state.
    fn text(&mut self) -> String;

    /// hOCR body markup for the recognized page, without document envelope.
    fn hocr_body(&mut self) -> String;

    /// A cursor positioned at the first detected element of the page, or
    /// `None` when nothing was detected. The cursor borrows the engine and
    /// is released at the end of the extraction call.
    fn cursor(&self) -> Option<Box<dyn ResultCursor + '_>>;

    /// Orientation signals from the thresholded image, or `None` when the
    /// heuristic errored.
    fn orientation_signals(&self) -> Option<OrientationSignals>;
}

/// Cursor over detected page elements at a chosen granularity.
///
/// Mirrors the C-style result iterator of the native engine: all queries read
/// the element at the current position, and [`advance`](Self::advance) moves
/// to the next element at the given granularity.
pub trait ResultCursor {
    /// Engine-reported confidence for the current element, as a percentage
    /// in `[0, 100]`.
    fn confidence(&self, granularity: Granularity) -> f32;

    /// Recognized text of the current element.
    fn text(&self, granularity: Granularity) -> String;

    /// True when the current element starts a text line.
    fn at_line_start(&self) -> bool;

    /// True when the current element is the last at `granularity` within its
    /// text line.
    fn at_line_end(&self, granularity: Granularity) -> bool;

    /// Bounding box of the current element.
    fn bounding_box(&self, granularity: Granularity) -> Rect;

    /// Move to the next element at `granularity`. Returns false when the
    /// page is exhausted.
    fn advance(&mut self, granularity: Granularity) -> bool;
}
