use crate::foundation::core::{Affine, Size, Vec2};
use crate::geometry::frame::{PreviewFrame, image_placement};

/// Upper bound for brightness/contrast/saturation percentages.
pub const MAX_ADJUST_PERCENT: u16 = 200;
/// Rotation range limit in degrees (symmetric).
pub const MAX_ROTATION_DEG: f64 = 180.0;
/// Zoom range.
pub const ZOOM_RANGE: (f64, f64) = (1.0, 3.0);
/// Pan range limit in preview pixels (symmetric).
pub const MAX_PAN_PX: f64 = 250.0;

/// Colour adjustments as CSS-filter percentages; 100 leaves the image unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Adjustments {
    /// `brightness()` percentage in `[0, 200]`.
    pub brightness: u16,
    /// `contrast()` percentage in `[0, 200]`.
    pub contrast: u16,
    /// `saturate()` percentage in `[0, 200]`.
    pub saturation: u16,
}

impl Default for Adjustments {
    fn default() -> Self {
        Self {
            brightness: 100,
            contrast: 100,
            saturation: 100,
        }
    }
}

impl Adjustments {
    /// Copy with every field clamped into range.
    pub fn clamped(self) -> Self {
        Self {
            brightness: self.brightness.min(MAX_ADJUST_PERCENT),
            contrast: self.contrast.min(MAX_ADJUST_PERCENT),
            saturation: self.saturation.min(MAX_ADJUST_PERCENT),
        }
    }

    /// True when the filter would not change any pixel.
    pub fn is_identity(self) -> bool {
        self == Self::default()
    }

    /// The equivalent CSS `filter` value, for hosts that preview declaratively.
    pub fn css_filter(self) -> String {
        format!(
            "brightness({}%) contrast({}%) saturate({}%)",
            self.brightness, self.contrast, self.saturation
        )
    }
}

/// Pan/zoom/rotate of the source image plus the output resolution scale.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewTransform {
    /// Rotation in degrees, `[-180, 180]`.
    pub rotation: f64,
    /// Zoom factor, `[1, 3]`.
    pub zoom: f64,
    /// Horizontal pan in preview pixels, `[-250, 250]`.
    pub pan_x: f64,
    /// Vertical pan in preview pixels, `[-250, 250]`.
    pub pan_y: f64,
    /// Output resolution as a percentage of the preview frame, `1..=100`.
    pub output_scale: u8,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            output_scale: 100,
        }
    }
}

impl ViewTransform {
    /// Copy with every field clamped into range; non-finite values fall back to defaults.
    pub fn clamped(self) -> Self {
        let d = Self::default();
        let finite = |v: f64, fallback: f64| if v.is_finite() { v } else { fallback };
        Self {
            rotation: finite(self.rotation, d.rotation).clamp(-MAX_ROTATION_DEG, MAX_ROTATION_DEG),
            zoom: finite(self.zoom, d.zoom).clamp(ZOOM_RANGE.0, ZOOM_RANGE.1),
            pan_x: finite(self.pan_x, d.pan_x).clamp(-MAX_PAN_PX, MAX_PAN_PX),
            pan_y: finite(self.pan_y, d.pan_y).clamp(-MAX_PAN_PX, MAX_PAN_PX),
            output_scale: self.output_scale.clamp(1, 100),
        }
    }

    /// Rotate a further 90 degrees clockwise, wrapping back into `[-180, 180]`.
    pub fn rotate_quarter_turn(&mut self) {
        let mut r = self.rotation + 90.0;
        if r > MAX_ROTATION_DEG {
            r -= 360.0;
        }
        self.rotation = r;
    }

    /// Output scale as a factor (1.0 = preview resolution).
    pub fn output_factor(self) -> f64 {
        f64::from(self.output_scale) / 100.0
    }

    /// Pan offset as a vector.
    pub fn pan(self) -> Vec2 {
        Vec2::new(self.pan_x, self.pan_y)
    }

    /// Image-to-preview placement for a source of `image` size.
    pub fn image_affine(self, frame: PreviewFrame, image: Size) -> Affine {
        image_placement(frame, image, self.pan(), self.zoom, self.rotation)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/adjust.rs"]
mod tests;
