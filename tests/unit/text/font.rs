use super::*;

#[test]
fn garbage_bytes_register_no_family() {
    let err = BubbleFont::from_bytes(b"definitely not a font".to_vec())
        .err()
        .unwrap();
    assert!(matches!(err, PanelError::Validation(_)));
}

#[test]
fn missing_font_file_is_validation_error() {
    let err = BubbleFont::from_path(Path::new("/nonexistent/panelkit/font.ttf"))
        .err()
        .unwrap();
    assert!(err.to_string().contains("failed to read font"));
}

fn system_font() -> Option<BubbleFont> {
    match BubbleFont::system_default() {
        Ok(font) => Some(font),
        Err(e) => {
            eprintln!("skipping: {e}");
            None
        }
    }
}

#[test]
fn system_font_measures_like_a_proportional_face() {
    let Some(mut font) = system_font() else {
        return;
    };
    assert!(!font.family().trim().is_empty());
    assert_eq!(font.measure("", 20.0), 0.0);

    let short = font.measure("Hey", 20.0);
    let long = font.measure("Hey there", 20.0);
    assert!(short > 0.0 && long > short);
    assert!((font.measure("Hey", 40.0) - 2.0 * short).abs() < 1.0);
    assert!(font.measure("iiii", 20.0) < font.measure("WWWW", 20.0));
}

#[test]
fn shaped_line_width_matches_measure() {
    let Some(mut font) = system_font() else {
        return;
    };
    let layout = font.shape_line("Meanwhile...", 18.0, TextBrushRgba8::default());
    assert_eq!(layout.lines().count(), 1);
    assert_eq!(f64::from(layout.width()), font.measure("Meanwhile...", 18.0));
}

#[test]
fn detect_prefers_configured_path_and_falls_back_to_system() {
    use crate::text::measure::TextEngine;

    let err = TextEngine::detect(Some(Path::new("/definitely/missing/font.ttf"))).unwrap_err();
    assert!(matches!(err, PanelError::Validation(_)));

    let engine = TextEngine::detect(None).unwrap();
    assert_eq!(engine.has_font(), BubbleFont::system_default().is_ok());
}
