use std::io::Cursor;

use super::*;

fn png_bytes(rgba: Vec<u8>, w: u32, h: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_raw(w, h, rgba).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_png_data_uri_premultiplies() {
    let uri = to_data_uri("image/png", &png_bytes(vec![100, 50, 200, 128], 1, 1));
    let img = decode_data_uri(&uri).unwrap();
    assert_eq!((img.width, img.height), (1, 1));
    assert_eq!(
        img.rgba8_premul.as_slice(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
    assert_eq!(img.size(), Size::new(1.0, 1.0));
}

#[test]
fn parse_reports_mime() {
    let (mime, bytes) = parse_data_uri("data:image/jpeg;base64,AAEC").unwrap();
    assert_eq!(mime, "image/jpeg");
    assert_eq!(bytes, [0, 1, 2]);
}

#[test]
fn malformed_uris_are_image_load_errors() {
    for uri in [
        "https://example.com/a.png",
        "data:image/png;base64",
        "data:image/png,plain",
        "data:image/png;base64,!!!not base64!!!",
        "data:image/png;base64,AAAA",
    ] {
        let err = decode_data_uri(uri).unwrap_err();
        assert!(err.is_image_load(), "{uri}: {err}");
    }
}
