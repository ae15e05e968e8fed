use crate::foundation::core::{Affine, Point, Rect, Size, Vec2};

/// Logical width of the editing frame; height follows from the panel's aspect ratio.
pub const PREVIEW_WIDTH: f64 = 500.0;

/// The fixed-size preview-space frame a panel is edited in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewFrame {
    /// Frame width in preview pixels.
    pub width: f64,
    /// Frame height in preview pixels.
    pub height: f64,
}

impl PreviewFrame {
    /// Frame of `width` with height `width / (ratio_w / ratio_h)`.
    pub fn from_ratio(width: f64, ratio_w: u32, ratio_h: u32) -> Self {
        let ratio = f64::from(ratio_w) / f64::from(ratio_h);
        Self {
            width,
            height: width / ratio,
        }
    }

    /// Frame rectangle anchored at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Frame centre.
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Size the source image is drawn at so that it covers the whole frame.
    ///
    /// Wider-than-frame images fit the height and overflow horizontally; everything else fits the
    /// width and overflows vertically.
    pub fn cover_size(self, image: Size) -> Size {
        let image_ratio = image.width / image.height;
        let frame_ratio = self.width / self.height;
        if image_ratio > frame_ratio {
            Size::new(self.height * image_ratio, self.height)
        } else {
            Size::new(self.width, self.width / image_ratio)
        }
    }

    /// Pixel dimensions of the flattened output at `scale` (1.0 = preview resolution).
    pub fn output_size(self, scale: f64) -> (u32, u32) {
        let w = (self.width * scale).floor().max(1.0) as u32;
        let h = (self.height * scale).floor().max(1.0) as u32;
        (w, h)
    }
}

/// Map from source-image pixel space to preview space.
///
/// Composition order: translate to the frame centre, apply pan, apply zoom, apply rotation, then
/// draw the cover-sized image centred at the origin. Both the live preview and the compositor use
/// this one function.
pub fn image_placement(
    frame: PreviewFrame,
    image: Size,
    pan: Vec2,
    zoom: f64,
    rotation_deg: f64,
) -> Affine {
    let draw = frame.cover_size(image);
    let to_center = Affine::translate(frame.center().to_vec2());
    let t_pan = Affine::translate(pan);
    let t_zoom = Affine::scale(zoom);
    let t_rotate = Affine::rotate(rotation_deg.to_radians());
    let t_center_image = Affine::translate(Vec2::new(-draw.width / 2.0, -draw.height / 2.0));
    let t_fit = Affine::scale_non_uniform(draw.width / image.width, draw.height / image.height);

    to_center * t_pan * t_zoom * t_rotate * t_center_image * t_fit
}

/// Map from preview space to output pixels for an output scale factor.
pub fn output_transform(scale: f64) -> Affine {
    Affine::scale(scale)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/frame.rs"]
mod tests;
