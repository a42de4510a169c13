//! The stateful OCR session.

use crate::engine::RecognitionEngine;
use crate::error::OcrError;
use crate::hocr;
use crate::layout;
use crate::orientation;
use crate::progress::ProgressMonitor;
use crate::types::{Granularity, Orientation, TextRegion};

/// Completion state of the expensive passes for the currently loaded image.
///
/// Replaces the two ad hoc booleans of a typical engine wrapper with one
/// explicit machine: `NoImage -> ImageLoaded -> LayoutAnalyzed -> Recognized`.
/// Loading a new image or clearing resets to the start; recognition implies
/// analysis, so `LayoutAnalyzed` is skipped when recognition runs first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassState {
    NoImage,
    ImageLoaded,
    LayoutAnalyzed,
    Recognized,
}

/// Stateful orchestrator over a recognition engine.
///
/// Owns the engine handle exclusively for the session's lifetime and tracks
/// which expensive passes have completed for the current image. Analysis and
/// recognition each run at most once per image; extraction re-reads retained
/// engine state on every call, so repeated retrievals are cheap and return
/// consistent results until the image changes.
///
/// Single-threaded by design: every operation runs to completion on the
/// caller's thread, and progress callbacks fire from inside the blocking
/// recognition call. Use one session per worker for parallelism.
pub struct OcrSession<E: RecognitionEngine> {
    engine: E,
    state: PassState,
}

impl<E: RecognitionEngine> OcrSession<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            state: PassState::NoImage,
        }
    }

    /// Shared access to the underlying engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Current pass state for the loaded image.
    pub fn state(&self) -> PassState {
        self.state
    }

    /// Engine version string.
    pub fn version(&self) -> &str {
        self.engine.version()
    }

    /// Initialize the engine from in-memory model data.
    ///
    /// Expensive; idempotent across repeated calls. On failure the session
    /// cannot recognize until a model is successfully reloaded.
    pub fn load_model(&mut self, model: &[u8], language: &str) -> Result<(), OcrError> {
        self.engine.load_model(model, language)?;
        tracing::info!(language, model_bytes = model.len(), "model loaded");
        Ok(())
    }

    /// Read an engine configuration variable. `None` when unknown.
    pub fn get_variable(&self, name: &str) -> Option<String> {
        self.engine.get_variable(name)
    }

    /// Set an engine configuration variable.
    pub fn set_variable(&mut self, name: &str, value: &str) -> Result<(), OcrError> {
        self.engine.set_variable(name, value)
    }

    /// Decode `bytes` into the engine and make it the current image.
    ///
    /// Resets both passes: a later retrieval triggers fresh analysis or
    /// recognition even if the previous image had completed ones. The
    /// caller's buffer may be released as soon as this returns. On decode
    /// failure no image is loaded.
    pub fn load_image(&mut self, bytes: &[u8]) -> Result<(), OcrError> {
        match self.engine.load_image(bytes) {
            Ok(()) => {
                tracing::debug!(image_bytes = bytes.len(), "image loaded");
                self.state = PassState::ImageLoaded;
                Ok(())
            }
            Err(err) => {
                self.state = PassState::NoImage;
                Err(err)
            }
        }
    }

    /// Release the current image and any retained results.
    pub fn clear_image(&mut self) {
        self.engine.clear_image();
        self.state = PassState::NoImage;
    }

    /// Bounding boxes at `granularity`, without text or confidence.
    ///
    /// Runs layout analysis if it has not run for this image; never runs a
    /// full recognition pass. Empty when no image is loaded or the page has
    /// no detected elements.
    pub fn get_bounding_boxes(&mut self, granularity: Granularity) -> Vec<TextRegion> {
        if !self.ensure_layout_analysed() {
            return Vec::new();
        }
        self.extract(granularity, false)
    }

    /// Bounding boxes with recognized text and confidence.
    ///
    /// Runs recognition if it has not run for this image, reporting progress
    /// through `progress`.
    pub fn get_text_boxes(
        &mut self,
        granularity: Granularity,
        progress: Option<&mut dyn FnMut(u32)>,
    ) -> Vec<TextRegion> {
        self.ensure_recognized(progress);
        if self.state != PassState::Recognized {
            return Vec::new();
        }
        self.extract(granularity, true)
    }

    /// Recognized page text as UTF-8.
    pub fn get_text(&mut self, progress: Option<&mut dyn FnMut(u32)>) -> String {
        self.ensure_recognized(progress);
        if self.state != PassState::Recognized {
            return String::new();
        }
        self.engine.text()
    }

    /// Complete hOCR document for the recognized page.
    pub fn get_hocr(&mut self, progress: Option<&mut dyn FnMut(u32)>) -> String {
        self.ensure_recognized(progress);
        let body = if self.state == PassState::Recognized {
            self.engine.hocr_body()
        } else {
            String::new()
        };
        hocr::document(self.engine.version(), &body)
    }

    /// Page rotation estimate from the thresholded image.
    ///
    /// Independent of the analysis/recognition passes; callable at any time
    /// after an image is loaded. Reports zero confidence when the underlying
    /// heuristic fails.
    pub fn get_orientation(&self) -> Orientation {
        orientation::estimate(self.engine.orientation_signals())
    }

    /// Run layout analysis once per image. False when no image is loaded.
    fn ensure_layout_analysed(&mut self) -> bool {
        match self.state {
            PassState::NoImage => false,
            PassState::ImageLoaded => {
                tracing::debug!("running layout analysis");
                self.engine.analyse_layout();
                self.state = PassState::LayoutAnalyzed;
                true
            }
            PassState::LayoutAnalyzed | PassState::Recognized => true,
        }
    }

    /// Run recognition once per image and emit the terminal progress event.
    ///
    /// The engine may stop short of 100 or, when the pass is skipped, report
    /// nothing at all, so the terminal notification is sent here in both
    /// cases. With no image loaded the pass is skipped entirely.
    fn ensure_recognized(&mut self, progress: Option<&mut dyn FnMut(u32)>) {
        let mut monitor = ProgressMonitor::new(progress);
        match self.state {
            PassState::NoImage | PassState::Recognized => {}
            PassState::ImageLoaded | PassState::LayoutAnalyzed => {
                tracing::debug!("running recognition pass");
                self.engine.recognize(&mut monitor);
                self.state = PassState::Recognized;
            }
        }
        monitor.notify(100);
    }

    fn extract(&self, granularity: Granularity, with_text: bool) -> Vec<TextRegion> {
        match self.engine.cursor() {
            Some(mut cursor) => layout::extract(cursor.as_mut(), granularity, with_text),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::mock::{MockEngine, PageScript};

    #[test]
    fn state_starts_without_an_image() {
        let session = OcrSession::new(MockEngine::new());
        assert_eq!(session.state(), PassState::NoImage);
    }

    #[test]
    fn bounding_boxes_advance_state_to_analyzed_only() {
        let mut session = OcrSession::new(MockEngine::with_page(PageScript::two_line_sample()));
        session.load_image(b"img").unwrap();
        assert_eq!(session.state(), PassState::ImageLoaded);

        session.get_bounding_boxes(Granularity::Word);
        assert_eq!(session.state(), PassState::LayoutAnalyzed);
    }

    #[test]
    fn recognition_skips_the_intermediate_state() {
        let mut session = OcrSession::new(MockEngine::with_page(PageScript::two_line_sample()));
        session.load_image(b"img").unwrap();

        session.get_text(None);
        assert_eq!(session.state(), PassState::Recognized);
    }

    #[test]
    fn clear_image_resets_state() {
        let mut session = OcrSession::new(MockEngine::with_page(PageScript::two_line_sample()));
        session.load_image(b"img").unwrap();
        session.get_text(None);

        session.clear_image();
        assert_eq!(session.state(), PassState::NoImage);
    }

    #[test]
    fn failed_image_load_leaves_no_image() {
        let mut session = OcrSession::new(MockEngine::with_page(PageScript::two_line_sample()));
        session.load_image(b"img").unwrap();

        assert!(session.load_image(b"").is_err());
        assert_eq!(session.state(), PassState::NoImage);
        assert!(session.get_bounding_boxes(Granularity::Word).is_empty());
    }
}
