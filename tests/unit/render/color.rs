use super::*;

fn adj(brightness: u16, contrast: u16, saturation: u16) -> Adjustments {
    Adjustments {
        brightness,
        contrast,
        saturation,
    }
}

#[test]
fn identity_chain_is_identity() {
    let mut px = vec![10u8, 20, 30, 255, 50, 60, 70, 128];
    let src = px.clone();
    apply_color_chain_premul(&mut px, &[ColorMatrix::IDENTITY; 3]);
    for (a, b) in px.iter().zip(&src) {
        assert!((i32::from(*a) - i32::from(*b)).abs() <= 1);
    }
}

#[test]
fn identity_adjustments_skip_the_pass() {
    let mut px = vec![10u8, 20, 30, 40];
    apply_adjustments_premul(&mut px, Adjustments::default());
    assert_eq!(px, [10, 20, 30, 40]);
}

#[test]
fn zero_brightness_is_black() {
    let mut px = vec![200u8, 100, 50, 255];
    apply_adjustments_premul(&mut px, adj(0, 100, 100));
    assert_eq!(px, [0, 0, 0, 255]);
}

#[test]
fn brightness_clamps_at_white() {
    let mut px = vec![200u8, 100, 50, 255];
    apply_adjustments_premul(&mut px, adj(200, 100, 100));
    assert_eq!(px, [255, 200, 100, 255]);
}

#[test]
fn zero_contrast_is_mid_grey() {
    let mut px = vec![250u8, 3, 90, 255];
    apply_adjustments_premul(&mut px, adj(100, 0, 100));
    assert_eq!(px, [128, 128, 128, 255]);
}

#[test]
fn zero_saturation_is_luma_grey() {
    let mut px = vec![255u8, 0, 0, 255];
    apply_adjustments_premul(&mut px, adj(100, 100, 0));
    let expected = (0.213f32 * 255.0).round() as u8;
    assert_eq!(px, [expected, expected, expected, 255]);
}

#[test]
fn order_is_brightness_then_contrast() {
    // brightness 200% clamps 200 -> 255 first; contrast 50% then maps 1.0 -> 0.75.
    let mut px = vec![200u8, 200, 200, 255];
    apply_adjustments_premul(&mut px, adj(200, 50, 100));
    assert_eq!(px[0], (0.75f32 * 255.0).round() as u8);
}

#[test]
fn transparent_pixels_untouched_and_alpha_preserved() {
    let mut px = vec![0u8, 0, 0, 0, 64, 32, 16, 128];
    apply_adjustments_premul(&mut px, adj(150, 120, 80));
    assert_eq!(&px[..4], &[0, 0, 0, 0]);
    assert_eq!(px[7], 128);
}
