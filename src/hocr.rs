//! hOCR document assembly.
//!
//! The engine produces only the body markup for a page; the surrounding XHTML
//! envelope is fixed string templating, independent of the recognition
//! pipeline. The header carries the engine version in the `ocr-system` meta
//! tag so consumers can attribute the output.

/// Wrap `body` in a complete hOCR document for an engine identified by
/// `version`.
pub fn document(version: &str, body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">
<html xmlns="http://www.w3.org/1999/xhtml" xml:lang="en" lang="en">
<head>
  <title>hOCR text</title>
  <meta http-equiv="Content-Type" content="text/html;charset=utf-8"/>
  <meta name='ocr-system' content='tesseract {version}' />
  <meta name='ocr-capabilities' content='ocr_page ocr_carea ocr_par ocr_line ocrx_word ocrp_wconf' />
</head>
<body>
  {body}
</body>
</html>"#
    )
}
