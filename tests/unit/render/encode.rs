use super::*;
use crate::assets::decode::decode_data_uri;

fn solid(w: u32, h: u32, px: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width: w,
        height: h,
        data: px.repeat((w * h) as usize),
        premultiplied: true,
    }
}

#[test]
fn jpeg_data_uri_decodes_back_close_to_source() {
    let frame = solid(16, 8, [200, 40, 90, 255]);
    let uri = ExportFormat::default().data_uri(&frame).unwrap();
    assert!(uri.starts_with("data:image/jpeg;base64,"));

    let back = decode_data_uri(&uri).unwrap();
    assert_eq!((back.width, back.height), (16, 8));
    for px in back.rgba8_premul.chunks_exact(4) {
        assert!((i32::from(px[0]) - 200).abs() <= 4);
        assert!((i32::from(px[1]) - 40).abs() <= 4);
        assert!((i32::from(px[2]) - 90).abs() <= 4);
        assert_eq!(px[3], 255);
    }
}

#[test]
fn png_is_lossless() {
    let frame = solid(3, 2, [10, 20, 30, 255]);
    let uri = ExportFormat::Png.data_uri(&frame).unwrap();
    let back = decode_data_uri(&uri).unwrap();
    assert_eq!(back.rgba8_premul.as_slice(), frame.data.as_slice());
}

#[test]
fn extension_selects_format() {
    assert_eq!(
        ExportFormat::from_extension("JPG", 80).unwrap(),
        ExportFormat::Jpeg { quality: 80 }
    );
    assert_eq!(ExportFormat::from_extension("png", 80).unwrap(), ExportFormat::Png);
    assert!(ExportFormat::from_extension("gif", 80).is_err());
}

#[test]
fn mismatched_frame_is_encode_error() {
    let mut frame = solid(2, 2, [0, 0, 0, 255]);
    frame.data.pop();
    let err = ExportFormat::Png.encode(&frame).unwrap_err();
    assert!(matches!(err, PanelError::Encode(_)));
}
