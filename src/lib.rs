//! Embeddable OCR session engine.
//!
//! [`OcrSession`] wraps a recognition engine behind the [`RecognitionEngine`]
//! trait and coordinates its expensive passes: load a trained model once,
//! then per image lazily run layout analysis and recognition exactly once
//! each, extracting bounding boxes, text, hOCR markup and a page-orientation
//! estimate from the retained results.
//!
//! ```
//! use ocrkit::engines::mock::{MockEngine, PageScript};
//! use ocrkit::{Granularity, OcrSession};
//!
//! let mut session = OcrSession::new(MockEngine::with_page(PageScript::two_line_sample()));
//! session.load_model(b"model-data", "eng").unwrap();
//! session.load_image(b"encoded-image").unwrap();
//!
//! // Layout analysis only; no recognition pass.
//! let boxes = session.get_bounding_boxes(Granularity::Word);
//! assert_eq!(boxes.len(), 4);
//!
//! // First text retrieval runs recognition and reports progress.
//! let mut last = 0;
//! let text = session.get_text(Some(&mut |pct| last = pct));
//! assert_eq!(last, 100);
//! assert!(text.starts_with("Hello"));
//! ```

mod buffer;
mod error;
mod hocr;
mod layout;
mod orientation;
mod progress;
mod session;
mod types;

pub mod engine;
pub mod engines;

pub use buffer::RawBuffer;
pub use engine::{OrientationSignals, RecognitionEngine, ResultCursor};
pub use error::OcrError;
pub use progress::ProgressMonitor;
pub use session::{OcrSession, PassState};
pub use types::{Granularity, LayoutFlags, Orientation, Rect, TextRegion};
