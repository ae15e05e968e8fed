use crate::model::adjust::Adjustments;

/// Row-major 4×5 colour matrix over straight RGBA in `[0, 1]` (last column is the offset).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorMatrix(pub [f32; 20]);

impl ColorMatrix {
    /// Leaves every channel unchanged.
    pub const IDENTITY: Self = Self([
        1.0, 0.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 0.0, 1.0, 0.0,
    ]);

    /// CSS `brightness(amount)`.
    pub fn brightness(amount: f32) -> Self {
        let b = amount.max(0.0);
        Self([
            b, 0.0, 0.0, 0.0, 0.0, //
            0.0, b, 0.0, 0.0, 0.0, //
            0.0, 0.0, b, 0.0, 0.0, //
            0.0, 0.0, 0.0, 1.0, 0.0,
        ])
    }

    /// CSS `contrast(amount)`: `(c - 0.5) * amount + 0.5`.
    pub fn contrast(amount: f32) -> Self {
        let k = amount.max(0.0);
        let off = 0.5 - 0.5 * k;
        Self([
            k, 0.0, 0.0, 0.0, off, //
            0.0, k, 0.0, 0.0, off, //
            0.0, 0.0, k, 0.0, off, //
            0.0, 0.0, 0.0, 1.0, 0.0,
        ])
    }

    /// CSS `saturate(amount)` with the Rec. 709 luma weights.
    pub fn saturate(amount: f32) -> Self {
        let s = amount.max(0.0);
        Self([
            0.213 + 0.787 * s,
            0.715 - 0.715 * s,
            0.072 - 0.072 * s,
            0.0,
            0.0,
            0.213 - 0.213 * s,
            0.715 + 0.285 * s,
            0.072 - 0.072 * s,
            0.0,
            0.0,
            0.213 - 0.213 * s,
            0.715 - 0.715 * s,
            0.072 + 0.928 * s,
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
            0.0,
        ])
    }

    fn apply(&self, px: [f32; 4]) -> [f32; 4] {
        let m = &self.0;
        let [r, g, b, a] = px;
        let row = |i: usize| {
            (m[i] * r + m[i + 1] * g + m[i + 2] * b + m[i + 3] * a + m[i + 4]).clamp(0.0, 1.0)
        };
        [row(0), row(5), row(10), row(15)]
    }
}

/// The filter chain for a set of adjustments: brightness, then contrast, then saturation.
pub fn css_filter_chain(adj: Adjustments) -> [ColorMatrix; 3] {
    let pct = |v: u16| f32::from(v) / 100.0;
    [
        ColorMatrix::brightness(pct(adj.brightness)),
        ColorMatrix::contrast(pct(adj.contrast)),
        ColorMatrix::saturate(pct(adj.saturation)),
    ]
}

/// Apply `chain` to premultiplied RGBA8 in place, clamping to `[0, 1]` after every matrix.
pub fn apply_color_chain_premul(rgba: &mut [u8], chain: &[ColorMatrix]) {
    for px in rgba.chunks_exact_mut(4) {
        let pa = f32::from(px[3]) / 255.0;
        if pa <= 0.0 {
            continue;
        }

        // Convert premul -> straight for matrix application.
        let inv_a = 1.0 / pa;
        let mut c = [
            (f32::from(px[0]) / 255.0 * inv_a).min(1.0),
            (f32::from(px[1]) / 255.0 * inv_a).min(1.0),
            (f32::from(px[2]) / 255.0 * inv_a).min(1.0),
            pa,
        ];
        for m in chain {
            c = m.apply(c);
        }

        // Convert straight -> premul.
        let out_a = c[3];
        for i in 0..3 {
            px[i] = ((c[i] * out_a) * 255.0).round().clamp(0.0, 255.0) as u8;
        }
        px[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    }
}

/// Apply the CSS filter for `adj`; identity adjustments leave the buffer untouched.
pub fn apply_adjustments_premul(rgba: &mut [u8], adj: Adjustments) {
    let adj = adj.clamped();
    if adj.is_identity() {
        return;
    }
    apply_color_chain_premul(rgba, &css_filter_chain(adj));
}

#[cfg(test)]
#[path = "../../tests/unit/render/color.rs"]
mod tests;
