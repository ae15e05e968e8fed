use super::*;

#[test]
fn opaque_colors_premultiply_to_themselves() {
    assert_eq!(Rgba8::WHITE.to_premul_bytes(), [255, 255, 255, 255]);
    assert_eq!(
        Rgba8::opaque(0xFE, 0xF9, 0xC3).to_premul_bytes(),
        [0xFE, 0xF9, 0xC3, 0xFF]
    );
}

#[test]
fn translucent_colors_premultiply_with_rounding() {
    let c = Rgba8 {
        r: 100,
        g: 50,
        b: 200,
        a: 128,
    };
    assert_eq!(
        c.to_premul_bytes(),
        [
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128
        ]
    );
}

#[test]
fn css_hex_matches_channel_values() {
    assert_eq!(Rgba8::opaque(0xFE, 0xF9, 0xC3).to_css_hex(), "#FEF9C3");
    assert_eq!(
        Rgba8 {
            r: 0,
            g: 0,
            b: 0,
            a: 0x80
        }
        .to_css_hex(),
        "#00000080"
    );
}
