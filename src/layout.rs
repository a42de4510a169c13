//! Bounding-box and text extraction from a result cursor.

use crate::engine::ResultCursor;
use crate::types::{Granularity, LayoutFlags, TextRegion};

/// Walk `cursor` from its initial position and materialize every element at
/// `granularity` into a [`TextRegion`].
///
/// Requires a completed layout-analysis pass; text and confidence are only
/// meaningful after a completed recognition pass, so `with_text` must not be
/// set before one. Line-boundary flags are set at word granularity only.
/// The sequence is rebuilt from engine state on every call.
pub fn extract(
    cursor: &mut dyn ResultCursor,
    granularity: Granularity,
    with_text: bool,
) -> Vec<TextRegion> {
    let mut regions = Vec::new();

    loop {
        let mut region = TextRegion::default();

        if with_text {
            // The engine reports confidence as a percentage; scale to [0, 1].
            region.confidence = cursor.confidence(granularity) * 0.01;
            region.text = cursor.text(granularity);
        }

        if granularity == Granularity::Word {
            if cursor.at_line_start() {
                region.flags.insert(LayoutFlags::START_OF_LINE);
            }
            if cursor.at_line_end(granularity) {
                region.flags.insert(LayoutFlags::END_OF_LINE);
            }
        }

        region.rect = cursor.bounding_box(granularity);
        regions.push(region);

        if !cursor.advance(granularity) {
            break;
        }
    }

    regions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RecognitionEngine;
    use crate::engines::mock::{MockEngine, PageScript};
    use crate::progress::ProgressMonitor;

    fn recognized_engine() -> MockEngine {
        let mut engine = MockEngine::with_page(PageScript::two_line_sample());
        engine.load_image(b"img").unwrap();
        engine.analyse_layout();
        engine.recognize(&mut ProgressMonitor::sink());
        engine
    }

    #[test]
    fn word_granularity_sets_line_boundary_flags() {
        let engine = recognized_engine();
        let mut cursor = engine.cursor().unwrap();
        let regions = extract(cursor.as_mut(), Granularity::Word, false);

        // two_line_sample: "Hello brave world" / "again"
        assert_eq!(regions.len(), 4);
        assert!(regions[0].flags.contains(LayoutFlags::START_OF_LINE));
        assert!(!regions[0].flags.contains(LayoutFlags::END_OF_LINE));
        assert!(regions[1].flags.is_empty());
        assert!(regions[2].flags.contains(LayoutFlags::END_OF_LINE));
        assert!(regions[3].flags.contains(LayoutFlags::START_OF_LINE));
        assert!(regions[3].flags.contains(LayoutFlags::END_OF_LINE));
    }

    #[test]
    fn line_granularity_never_sets_flags() {
        let engine = recognized_engine();
        let mut cursor = engine.cursor().unwrap();
        let regions = extract(cursor.as_mut(), Granularity::Line, false);

        assert_eq!(regions.len(), 2);
        assert!(regions.iter().all(|r| r.flags.is_empty()));
    }

    #[test]
    fn text_is_omitted_unless_requested() {
        let engine = recognized_engine();

        let mut cursor = engine.cursor().unwrap();
        let without = extract(cursor.as_mut(), Granularity::Word, false);
        assert!(without.iter().all(|r| r.text.is_empty()));
        assert!(without.iter().all(|r| r.confidence == 0.0));

        let mut cursor = engine.cursor().unwrap();
        let with = extract(cursor.as_mut(), Granularity::Word, true);
        assert_eq!(with[0].text, "Hello");
        assert!(with[0].confidence > 0.0 && with[0].confidence <= 1.0);
    }

    #[test]
    fn confidence_is_scaled_from_percentage() {
        let engine = recognized_engine();
        let mut cursor = engine.cursor().unwrap();
        let regions = extract(cursor.as_mut(), Granularity::Word, true);

        // two_line_sample words carry a 91.0 percent confidence
        assert!((regions[0].confidence - 0.91).abs() < 1e-6);
    }
}
