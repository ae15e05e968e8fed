use crate::foundation::error::{PanelError, PanelResult};
use crate::foundation::math::mul_div255_u8;

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Source-over for premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = u16::from(src[3]);
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let inv = 255u16 - sa;
    let mut out = [0u8; 4];
    out[3] = src[3].saturating_add(mul_div255_u8(u16::from(dst[3]), inv));
    for i in 0..3 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

/// Composite `src` over `dst` in place; both are premultiplied RGBA8 of equal length.
pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> PanelResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(PanelError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// A `width × height` premultiplied buffer filled with one pixel.
pub fn filled(width: u32, height: u32, px: PremulRgba8) -> PanelResult<Vec<u8>> {
    let n = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| PanelError::render("surface size overflow"))?;
    Ok(px.repeat(n))
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
