use ocrkit::engines::mock::{MockEngine, PageScript};
use ocrkit::{Granularity, LayoutFlags, OcrSession, OrientationSignals, PassState, RawBuffer};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_test_writer()
        .try_init();
}

fn loaded_session() -> OcrSession<MockEngine> {
    init_logging();
    let mut session = OcrSession::new(MockEngine::with_page(PageScript::two_line_sample()));

    // Payloads cross the boundary as opaque owned buffers; the engine copies
    // them internally, so the buffers can be dropped right after each call.
    let model = RawBuffer::from_vec(b"model-data".to_vec());
    session.load_model(&model, "eng").unwrap();
    drop(model);

    let image = RawBuffer::from_vec(b"encoded-image".to_vec());
    session.load_image(&image).unwrap();
    session
}

#[test]
fn get_text_is_idempotent_and_recognizes_once() {
    let mut session = loaded_session();

    let first = session.get_text(None);
    let second = session.get_text(None);

    assert_eq!(first, second);
    assert_eq!(first, "Hello brave world\nagain\n");
    assert_eq!(session.engine().recognize_calls(), 1);
}

#[test]
fn bounding_boxes_never_trigger_recognition() {
    let mut session = loaded_session();

    session.get_bounding_boxes(Granularity::Word);
    session.get_bounding_boxes(Granularity::Line);

    assert_eq!(session.engine().analyse_calls(), 1);
    assert_eq!(session.engine().recognize_calls(), 0);
    assert_eq!(session.state(), PassState::LayoutAnalyzed);
}

#[test]
fn text_retrievals_share_a_single_recognition_pass() {
    let mut session = loaded_session();

    session.get_text_boxes(Granularity::Word, None);
    session.get_text(None);
    session.get_hocr(None);

    assert_eq!(session.engine().recognize_calls(), 1);
    // Recognition implies analysis, so no separate analysis pass ran.
    assert_eq!(session.engine().analyse_calls(), 0);
}

#[test]
fn loading_a_new_image_forces_a_fresh_pass() {
    let mut session = loaded_session();

    session.get_text(None);
    assert_eq!(session.engine().recognize_calls(), 1);

    session.load_image(b"another-image").unwrap();
    session.get_text(None);
    assert_eq!(session.engine().recognize_calls(), 2);
}

#[test]
fn clearing_then_reloading_forces_a_fresh_pass() {
    let mut session = loaded_session();

    session.get_text(None);
    session.clear_image();
    session.load_image(b"encoded-image").unwrap();
    session.get_text(None);

    assert_eq!(session.engine().recognize_calls(), 2);
}

#[test]
fn progress_is_non_decreasing_and_terminates_at_100() {
    let mut session = loaded_session();

    let mut seen = Vec::new();
    session.get_text(Some(&mut |pct| seen.push(pct)));

    assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(seen.last(), Some(&100));
    assert_eq!(seen.iter().filter(|&&p| p == 100).count(), 1);
}

#[test]
fn skipped_recognition_still_reports_completion() {
    let mut session = loaded_session();
    session.get_text(None);

    // Second retrieval skips the pass but must still emit the terminal event.
    let mut seen = Vec::new();
    session.get_text(Some(&mut |pct| seen.push(pct)));
    assert_eq!(seen, vec![100]);
}

#[test]
fn retrieval_without_an_image_is_empty_but_terminal() {
    init_logging();
    let mut session = OcrSession::new(MockEngine::new());

    assert!(session.get_bounding_boxes(Granularity::Word).is_empty());

    let mut seen = Vec::new();
    let text = session.get_text(Some(&mut |pct| seen.push(pct)));
    assert_eq!(text, "");
    assert_eq!(seen, vec![100]);
    assert_eq!(session.engine().recognize_calls(), 0);
}

#[test]
fn word_boxes_carry_line_boundary_flags() {
    let mut session = loaded_session();

    let words = session.get_text_boxes(Granularity::Word, None);
    assert_eq!(words.len(), 4);
    assert!(words[0].flags.contains(LayoutFlags::START_OF_LINE));
    assert!(words[2].flags.contains(LayoutFlags::END_OF_LINE));
    assert_eq!(words[0].text, "Hello");

    let lines = session.get_text_boxes(Granularity::Line, None);
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.flags.is_empty()));
    assert_eq!(lines[0].text, "Hello brave world");
}

#[test]
fn hocr_document_wraps_body_with_version() {
    let mut session = loaded_session();

    let doc = session.get_hocr(None);
    assert!(doc.contains("content='tesseract 5.3.0-mock'"));
    assert!(doc.contains("class='ocr_page'"));
    assert!(doc.contains("Hello"));
    assert!(doc.trim_end().ends_with("</html>"));
}

#[test]
fn orientation_follows_the_decision_table() {
    init_logging();
    let table = [
        ((10.0, 0.0), 0),
        ((-10.0, 0.0), 180),
        ((2.0, 3.0), 270),
        ((2.0, -3.0), 90),
    ];

    for ((up, left), expected) in table {
        let mut engine = MockEngine::new();
        engine.set_orientation_signals(Some(OrientationSignals {
            up_confidence: up,
            left_confidence: left,
        }));
        let session = OcrSession::new(engine);

        let result = session.get_orientation();
        assert_eq!(result.rotation, expected, "up={up} left={left}");
        assert_eq!(result.confidence, 1.0);
    }
}

#[test]
fn orientation_failure_is_a_zero_confidence_value() {
    init_logging();
    let mut engine = MockEngine::new();
    engine.set_orientation_signals(None);
    let session = OcrSession::new(engine);

    let result = session.get_orientation();
    assert_eq!(result.rotation, 0);
    assert_eq!(result.confidence, 0.0);
}

#[test]
fn variables_pass_through_to_the_engine() {
    let mut session = loaded_session();

    assert_eq!(
        session.get_variable("user_defined_dpi").as_deref(),
        Some("300")
    );
    assert!(session.get_variable("missing_variable").is_none());

    session.set_variable("user_defined_dpi", "600").unwrap();
    assert_eq!(
        session.get_variable("user_defined_dpi").as_deref(),
        Some("600")
    );

    let err = session.set_variable("missing_variable", "1").unwrap_err();
    assert!(err.to_string().contains("missing_variable"));
}

#[test]
fn model_load_failure_reports_a_message() {
    init_logging();
    let mut session = OcrSession::new(MockEngine::new());

    let err = session.load_model(b"", "eng").unwrap_err();
    assert!(err.to_string().contains("eng"));
}

#[test]
fn regions_serialize_to_stable_json() {
    let mut session = loaded_session();

    let words = session.get_text_boxes(Granularity::Word, None);
    let json = serde_json::to_value(&words[0]).unwrap();

    assert_eq!(json["rect"]["left"], 10);
    assert_eq!(json["text"], "Hello");
    assert_eq!(json["flags"], 1);
}
