use super::*;

#[test]
fn adjustments_default_to_identity() {
    let a = Adjustments::default();
    assert!(a.is_identity());
    assert_eq!(
        a.css_filter(),
        "brightness(100%) contrast(100%) saturate(100%)"
    );
}

#[test]
fn adjustments_clamp_to_200() {
    let a = Adjustments {
        brightness: 500,
        contrast: 0,
        saturation: 201,
    }
    .clamped();
    assert_eq!(
        a,
        Adjustments {
            brightness: 200,
            contrast: 0,
            saturation: 200
        }
    );
}

#[test]
fn transform_clamps_every_field() {
    let t = ViewTransform {
        rotation: -720.0,
        zoom: 0.2,
        pan_x: 900.0,
        pan_y: f64::NAN,
        output_scale: 0,
    }
    .clamped();
    assert_eq!(t.rotation, -180.0);
    assert_eq!(t.zoom, 1.0);
    assert_eq!(t.pan_x, 250.0);
    assert_eq!(t.pan_y, 0.0);
    assert_eq!(t.output_scale, 1);

    assert_eq!(
        ViewTransform {
            output_scale: 250,
            ..ViewTransform::default()
        }
        .clamped()
        .output_scale,
        100
    );
}

#[test]
fn quarter_turns_stay_in_range() {
    let mut t = ViewTransform::default();
    let mut seen = Vec::new();
    for _ in 0..4 {
        t.rotate_quarter_turn();
        seen.push(t.rotation);
    }
    assert_eq!(seen, vec![90.0, 180.0, -90.0, 0.0]);
}

#[test]
fn transform_json_uses_camel_case_and_defaults() {
    let t: ViewTransform = serde_json::from_str(r#"{"panX": 12, "outputScale": 50}"#).unwrap();
    assert_eq!(t.pan_x, 12.0);
    assert_eq!(t.output_scale, 50);
    assert_eq!(t.zoom, 1.0);
    assert!((t.output_factor() - 0.5).abs() < 1e-12);
}
