use super::*;

#[test]
fn over_transparent_src_keeps_dst() {
    assert_eq!(over([1, 2, 3, 4], [9, 9, 9, 0]), [1, 2, 3, 4]);
}

#[test]
fn over_opaque_src_replaces_dst() {
    assert_eq!(over([1, 2, 3, 255], [9, 8, 7, 255]), [9, 8, 7, 255]);
}

#[test]
fn half_black_over_white_is_mid_grey() {
    let out = over([255, 255, 255, 255], [0, 0, 0, 128]);
    assert_eq!(out[3], 255);
    assert!((i32::from(out[0]) - 127).abs() <= 1);
}

#[test]
fn over_in_place_rejects_mismatched_lengths() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
    assert!(over_in_place(&mut dst[..6], &[0u8; 6]).is_err());
}

#[test]
fn filled_repeats_pixel() {
    let buf = filled(2, 3, [255, 255, 255, 255]).unwrap();
    assert_eq!(buf.len(), 24);
    assert!(buf.iter().all(|&b| b == 255));
}
