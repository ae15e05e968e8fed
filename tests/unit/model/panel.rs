use super::*;

#[test]
fn aspect_ratio_parses_labels() {
    for r in AspectRatio::ALL {
        assert_eq!(r.as_str().parse::<AspectRatio>().unwrap(), r);
    }
    assert!("2:1".parse::<AspectRatio>().is_err());
}

#[test]
fn aspect_ratio_serializes_as_label() {
    assert_eq!(
        serde_json::to_string(&AspectRatio::Wide).unwrap(),
        "\"16:9\""
    );
    let r: AspectRatio = serde_json::from_str("\"3:4\"").unwrap();
    assert_eq!(r, AspectRatio::Portrait);
}

#[test]
fn frames_follow_ratio() {
    assert_eq!(AspectRatio::Landscape.frame(500.0).height, 375.0);
    assert_eq!(AspectRatio::Square.frame(500.0).width, 500.0);
}

#[test]
fn loading_flag_is_not_persisted() {
    let mut p = Panel::new(PanelId::new("p1"), "a cat", AspectRatio::Square);
    p.is_loading = true;
    let json = serde_json::to_string(&p).unwrap();
    assert!(!json.contains("isLoading"));
    assert!(json.contains("\"imageUrl\":null"));

    let back: Panel = serde_json::from_str(&json).unwrap();
    assert!(!back.is_loading);
    assert!(back.is_failed());
}
