use super::*;
use crate::model::panel::PanelId;

fn sample() -> Draft {
    let mut p = Panel::new(PanelId::new("panel-1-0"), "a lighthouse", AspectRatio::Portrait);
    p.image_url = Some("data:image/jpeg;base64,AA".into());
    p.is_loading = true;
    Draft::new("Once upon a time", vec![p], AspectRatio::Portrait)
}

#[test]
fn json_uses_camel_case_and_drops_loading() {
    let json = sample().to_json().unwrap();
    assert!(json.contains("\"aspectRatio\": \"3:4\""));
    assert!(json.contains("\"savedAt\""));
    assert!(json.contains("\"imageUrl\""));
    assert!(!json.contains("isLoading"));

    let back = Draft::from_json(&json).unwrap();
    assert!(!back.panels[0].is_loading);
    assert_eq!(back.panels[0].image_url, sample().panels[0].image_url);
}

#[test]
fn missing_fields_default() {
    let d = Draft::from_json("{\"story\":\"x\"}").unwrap();
    assert_eq!(d.story, "x");
    assert!(d.panels.is_empty());
    assert_eq!(d.aspect_ratio, AspectRatio::Square);
}

#[test]
fn malformed_json_is_serde_error() {
    let err = Draft::from_json("{ nope").unwrap_err();
    assert!(matches!(err, PanelError::Serde(_)));
}

#[test]
fn save_then_load_last_write_wins() {
    let dir = std::env::temp_dir().join(format!("panelkit-draft-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("draft.json");

    let mut first = sample();
    first.save(&path).unwrap();
    let mut second = Draft::new("Another story", Vec::new(), AspectRatio::Wide);
    second.save(&path).unwrap();

    let loaded = Draft::load(&path).unwrap();
    assert_eq!(loaded.story, "Another story");
    assert_eq!(loaded.aspect_ratio, AspectRatio::Wide);
    assert!(loaded.saved_at > 0);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_file_is_an_error() {
    assert!(Draft::load(Path::new("/nonexistent/panelkit/draft.json")).is_err());
}
