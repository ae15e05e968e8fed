use image::ImageEncoder as _;

use crate::assets::decode::to_data_uri;
use crate::foundation::error::{PanelError, PanelResult};
use crate::foundation::math::unpremultiply_rgba8_in_place;
use crate::render::cpu::FrameRGBA;

/// JPEG quality used for flattened panels unless configured otherwise.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Encoded output format for a flattened frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// Baseline JPEG at `quality` (1..=100); alpha is dropped.
    Jpeg {
        /// Encoder quality.
        quality: u8,
    },
    /// Lossless PNG with alpha.
    Png,
}

impl Default for ExportFormat {
    fn default() -> Self {
        Self::Jpeg {
            quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl ExportFormat {
    /// MIME type of the encoded bytes.
    pub fn mime(self) -> &'static str {
        match self {
            Self::Jpeg { .. } => "image/jpeg",
            Self::Png => "image/png",
        }
    }

    /// Pick a format from a file extension (`jpg`, `jpeg`, `png`), keeping `quality` for JPEG.
    pub fn from_extension(ext: &str, quality: u8) -> PanelResult<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg { quality }),
            "png" => Ok(Self::Png),
            other => Err(PanelError::validation(format!(
                "unsupported output extension '{other}' (expected jpg, jpeg or png)"
            ))),
        }
    }

    /// Encode `frame` to bytes.
    #[tracing::instrument(level = "debug", skip(frame), fields(w = frame.width, h = frame.height))]
    pub fn encode(self, frame: &FrameRGBA) -> PanelResult<Vec<u8>> {
        let rgba = frame.to_straight_rgba8()?;
        let mut out = Vec::new();
        match self {
            Self::Jpeg { quality } => {
                let rgb: Vec<u8> = rgba
                    .chunks_exact(4)
                    .flat_map(|px| [px[0], px[1], px[2]])
                    .collect();
                image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, quality.clamp(1, 100))
                    .write_image(&rgb, frame.width, frame.height, image::ExtendedColorType::Rgb8)
                    .map_err(|e| PanelError::encode(format!("jpeg encode failed: {e}")))?;
            }
            Self::Png => {
                image::codecs::png::PngEncoder::new(&mut out)
                    .write_image(&rgba, frame.width, frame.height, image::ExtendedColorType::Rgba8)
                    .map_err(|e| PanelError::encode(format!("png encode failed: {e}")))?;
            }
        }
        Ok(out)
    }

    /// Encode `frame` and wrap it as a data URI.
    pub fn data_uri(self, frame: &FrameRGBA) -> PanelResult<String> {
        Ok(to_data_uri(self.mime(), &self.encode(frame)?))
    }
}

impl FrameRGBA {
    /// Straight-alpha copy of the pixel data.
    pub fn to_straight_rgba8(&self) -> PanelResult<Vec<u8>> {
        let expected = (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4);
        if self.data.len() != expected {
            return Err(PanelError::encode("frame byte len mismatch"));
        }
        let mut data = self.data.clone();
        if self.premultiplied {
            unpremultiply_rgba8_in_place(&mut data);
        }
        Ok(data)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/encode.rs"]
mod tests;
