use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PanelError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PanelError::image_load("x")
            .to_string()
            .contains("image load error:")
    );
    assert!(PanelError::render("x").to_string().contains("render error:"));
    assert!(PanelError::encode("x").to_string().contains("encode error:"));
    assert!(
        PanelError::backend("x")
            .to_string()
            .contains("backend error:")
    );
    assert!(
        PanelError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PanelError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn image_load_is_distinguishable() {
    assert!(PanelError::image_load("bad base64").is_image_load());
    assert!(!PanelError::render("surface").is_image_load());
}
