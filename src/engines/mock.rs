//! Deterministic scripted engine for testing and development.
//!
//! Simulates the native engine's lifecycle without performing recognition:
//! a [`PageScript`] describes the detected page, progress emissions are
//! scripted, and pass counters make the session's memoization observable.

use std::collections::HashMap;

use crate::engine::{OrientationSignals, RecognitionEngine, ResultCursor};
use crate::error::OcrError;
use crate::progress::ProgressMonitor;
use crate::types::{Granularity, Rect};

/// One scripted word on a page.
#[derive(Debug, Clone)]
pub struct WordScript {
    pub text: String,
    pub rect: Rect,
    pub confidence: f32,
}

/// One scripted text line.
#[derive(Debug, Clone)]
pub struct LineScript {
    pub rect: Rect,
    pub confidence: f32,
    pub words: Vec<WordScript>,
}

/// The detected content of a scripted page.
#[derive(Debug, Clone, Default)]
pub struct PageScript {
    pub lines: Vec<LineScript>,
}

impl PageScript {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Two lines, "Hello brave world" and "again", with word confidence 91.
    pub fn two_line_sample() -> Self {
        let word = |text: &str, left: i32| WordScript {
            text: text.to_string(),
            rect: Rect::new(left, 10, left + 40, 30),
            confidence: 91.0,
        };
        Self {
            lines: vec![
                LineScript {
                    rect: Rect::new(10, 10, 160, 30),
                    confidence: 92.5,
                    words: vec![word("Hello", 10), word("brave", 60), word("world", 110)],
                },
                LineScript {
                    rect: Rect::new(10, 40, 60, 60),
                    confidence: 88.0,
                    words: vec![WordScript {
                        text: "again".to_string(),
                        rect: Rect::new(10, 40, 60, 60),
                        confidence: 91.0,
                    }],
                },
            ],
        }
    }
}

/// Scripted [`RecognitionEngine`] implementation.
pub struct MockEngine {
    page: PageScript,
    variables: HashMap<String, String>,
    progress_script: Vec<u32>,
    orientation: Option<OrientationSignals>,
    model_loaded: bool,
    image_loaded: bool,
    results_available: bool,
    recognized: bool,
    analyse_calls: u32,
    recognize_calls: u32,
}

impl MockEngine {
    pub fn new() -> Self {
        let mut variables = HashMap::new();
        variables.insert("tessedit_char_blacklist".to_string(), String::new());
        variables.insert("user_defined_dpi".to_string(), "300".to_string());

        Self {
            page: PageScript::empty(),
            variables,
            // Mirrors the native engine: partial progress only, never 100.
            progress_script: vec![25, 50, 75],
            orientation: Some(OrientationSignals {
                up_confidence: 12.0,
                left_confidence: 1.0,
            }),
            model_loaded: false,
            image_loaded: false,
            results_available: false,
            recognized: false,
            analyse_calls: 0,
            recognize_calls: 0,
        }
    }

    pub fn with_page(page: PageScript) -> Self {
        let mut engine = Self::new();
        engine.page = page;
        engine
    }

    /// Replace the progress values emitted during a recognition pass.
    pub fn set_progress_script(&mut self, script: Vec<u32>) {
        self.progress_script = script;
    }

    /// Script the orientation heuristic; `None` simulates a detection error.
    pub fn set_orientation_signals(&mut self, signals: Option<OrientationSignals>) {
        self.orientation = signals;
    }

    /// Number of layout-analysis passes run so far.
    pub fn analyse_calls(&self) -> u32 {
        self.analyse_calls
    }

    /// Number of recognition passes run so far.
    pub fn recognize_calls(&self) -> u32 {
        self.recognize_calls
    }
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecognitionEngine for MockEngine {
    fn version(&self) -> &str {
        "5.3.0-mock"
    }

    fn load_model(&mut self, model: &[u8], language: &str) -> Result<(), OcrError> {
        if model.is_empty() {
            return Err(OcrError::ModelLoad(format!(
                "no training data for language '{language}'"
            )));
        }
        self.model_loaded = true;
        Ok(())
    }

    fn load_image(&mut self, bytes: &[u8]) -> Result<(), OcrError> {
        if bytes.is_empty() {
            return Err(OcrError::ImageDecode("empty image data".to_string()));
        }
        self.image_loaded = true;
        self.results_available = false;
        self.recognized = false;
        Ok(())
    }

    fn clear_image(&mut self) {
        self.image_loaded = false;
        self.results_available = false;
        self.recognized = false;
    }

    fn get_variable(&self, name: &str) -> Option<String> {
        self.variables.get(name).cloned()
    }

    fn set_variable(&mut self, name: &str, value: &str) -> Result<(), OcrError> {
        match self.variables.get_mut(name) {
            Some(slot) => {
                *slot = value.to_string();
                Ok(())
            }
            None => Err(OcrError::Variable(format!("unknown variable '{name}'"))),
        }
    }

    fn analyse_layout(&mut self) {
        self.analyse_calls += 1;
        self.results_available = self.image_loaded;
    }

    fn recognize(&mut self, monitor: &mut ProgressMonitor<'_>) {
        self.recognize_calls += 1;
        for &pct in &self.progress_script {
            monitor.notify(pct);
        }
        self.results_available = self.image_loaded;
        self.recognized = self.image_loaded;
    }

    fn text(&mut self) -> String {
        if !self.recognized {
            return String::new();
        }
        let mut out = String::new();
        for line in &self.page.lines {
            for (i, word) in line.words.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push_str(&word.text);
            }
            out.push('\n');
        }
        out
    }

    fn hocr_body(&mut self) -> String {
        if !self.recognized {
            return String::new();
        }
        let mut body = String::from("<div class='ocr_page' id='page_1'>\n");
        for (i, line) in self.page.lines.iter().enumerate() {
            body.push_str(&format!(
                "  <span class='ocr_line' id='line_1_{}' title='bbox {} {} {} {}'>",
                i + 1,
                line.rect.left,
                line.rect.top,
                line.rect.right,
                line.rect.bottom
            ));
            for word in &line.words {
                body.push_str(&format!("<span class='ocrx_word'>{}</span> ", word.text));
            }
            body.push_str("</span>\n");
        }
        body.push_str("</div>");
        body
    }

    fn cursor(&self) -> Option<Box<dyn ResultCursor + '_>> {
        if !self.results_available || self.page.lines.is_empty() {
            return None;
        }
        Some(Box::new(MockCursor {
            page: &self.page,
            line: 0,
            word: 0,
        }))
    }

    fn orientation_signals(&self) -> Option<OrientationSignals> {
        self.orientation
    }
}

struct MockCursor<'a> {
    page: &'a PageScript,
    line: usize,
    word: usize,
}

impl MockCursor<'_> {
    fn current_line(&self) -> &LineScript {
        &self.page.lines[self.line]
    }

    fn current_word(&self) -> &WordScript {
        &self.current_line().words[self.word]
    }
}

impl ResultCursor for MockCursor<'_> {
    fn confidence(&self, granularity: Granularity) -> f32 {
        match granularity {
            Granularity::Word => self.current_word().confidence,
            Granularity::Line => self.current_line().confidence,
        }
    }

    fn text(&self, granularity: Granularity) -> String {
        match granularity {
            Granularity::Word => self.current_word().text.clone(),
            Granularity::Line => {
                let words: Vec<&str> = self
                    .current_line()
                    .words
                    .iter()
                    .map(|w| w.text.as_str())
                    .collect();
                words.join(" ")
            }
        }
    }

    fn at_line_start(&self) -> bool {
        self.word == 0
    }

    fn at_line_end(&self, granularity: Granularity) -> bool {
        match granularity {
            Granularity::Word => self.word + 1 == self.current_line().words.len(),
            Granularity::Line => true,
        }
    }

    fn bounding_box(&self, granularity: Granularity) -> Rect {
        match granularity {
            Granularity::Word => self.current_word().rect,
            Granularity::Line => self.current_line().rect,
        }
    }

    fn advance(&mut self, granularity: Granularity) -> bool {
        match granularity {
            Granularity::Word => {
                if self.word + 1 < self.current_line().words.len() {
                    self.word += 1;
                    return true;
                }
                if self.line + 1 < self.page.lines.len() {
                    self.line += 1;
                    self.word = 0;
                    return true;
                }
                false
            }
            Granularity::Line => {
                if self.line + 1 < self.page.lines.len() {
                    self.line += 1;
                    self.word = 0;
                    return true;
                }
                false
            }
        }
    }
}
