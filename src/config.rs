use std::path::PathBuf;

use crate::foundation::core::Rgba8;
use crate::geometry::frame::PREVIEW_WIDTH;
use crate::render::encode::DEFAULT_JPEG_QUALITY;

/// Environment override for the JPEG quality (`1..=100`).
pub const ENV_JPEG_QUALITY: &str = "PANELKIT_JPEG_QUALITY";
/// Environment override for the bubble font file.
pub const ENV_BUBBLE_FONT: &str = "PANELKIT_BUBBLE_FONT";

/// Options for the CPU compositor.
#[derive(Clone, Debug, PartialEq)]
pub struct CompositorOpts {
    pub(crate) preview_width: f64,
    pub(crate) jpeg_quality: u8,
    pub(crate) clear: Rgba8,
    pub(crate) font_path: Option<PathBuf>,
}

impl Default for CompositorOpts {
    fn default() -> Self {
        Self {
            preview_width: PREVIEW_WIDTH,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            clear: Rgba8::WHITE,
            font_path: None,
        }
    }
}

impl CompositorOpts {
    /// Defaults with `PANELKIT_*` environment overrides applied. Unparsable values are ignored.
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        if let Some(q) = std::env::var(ENV_JPEG_QUALITY)
            .ok()
            .and_then(|v| v.trim().parse::<u8>().ok())
            .filter(|q| (1..=100).contains(q))
        {
            opts.jpeg_quality = q;
        }
        if let Some(p) = std::env::var_os(ENV_BUBBLE_FONT).filter(|v| !v.is_empty()) {
            opts.font_path = Some(PathBuf::from(p));
        }
        opts
    }

    /// Logical preview width; must be finite and positive, otherwise the default is kept.
    pub fn with_preview_width(mut self, width: f64) -> Self {
        if width.is_finite() && width > 0.0 {
            self.preview_width = width;
        }
        self
    }

    /// JPEG quality, clamped to `1..=100`.
    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }

    /// Background the image layer is composited over.
    pub fn with_clear(mut self, clear: Rgba8) -> Self {
        self.clear = clear;
        self
    }

    /// Font file used to draw bubble text.
    pub fn with_font_path(mut self, path: Option<PathBuf>) -> Self {
        self.font_path = path;
        self
    }

    /// Logical preview width.
    pub fn preview_width(&self) -> f64 {
        self.preview_width
    }

    /// JPEG quality.
    pub fn jpeg_quality(&self) -> u8 {
        self.jpeg_quality
    }

    /// Background colour.
    pub fn clear(&self) -> Rgba8 {
        self.clear
    }

    /// Configured font file, if any.
    pub fn font_path(&self) -> Option<&std::path::Path> {
        self.font_path.as_deref()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
