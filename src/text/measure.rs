use std::path::Path;

use crate::foundation::error::PanelResult;
use crate::text::font::BubbleFont;

/// Width of a run of bubble text at a font size, in preview pixels.
///
/// Preview and export must be handed the same measurer, otherwise line breaks diverge.
pub trait TextMeasure {
    /// Advance width of `text` set bold at `font_size_px`.
    fn measure(&mut self, text: &str, font_size_px: f64) -> f64;
}

/// Deterministic measurer: every character advances by `advance_em` of the font size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvance {
    /// Advance per character as a fraction of the font size.
    pub advance_em: f64,
}

impl Default for FixedAdvance {
    fn default() -> Self {
        Self { advance_em: 0.6 }
    }
}

impl TextMeasure for FixedAdvance {
    fn measure(&mut self, text: &str, font_size_px: f64) -> f64 {
        text.chars().count() as f64 * (self.advance_em * font_size_px)
    }
}

/// The measurer a compositor carries: headless fixed advance, or a loaded font face that is also
/// used to draw glyphs.
pub enum TextEngine {
    /// No font; text is laid out but not drawn.
    Fixed(FixedAdvance),
    /// Parley-shaped font face.
    Font(Box<BubbleFont>),
}

/// Headless measurer; [`TextEngine::detect`] picks a drawable font.
impl Default for TextEngine {
    fn default() -> Self {
        Self::Fixed(FixedAdvance::default())
    }
}

impl std::fmt::Debug for TextEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed(m) => f.debug_tuple("Fixed").field(m).finish(),
            Self::Font(font) => f.debug_tuple("Font").field(&font.family()).finish(),
        }
    }
}

impl TextEngine {
    /// Font engine for `font_path` when given, otherwise for the system's bold sans-serif face.
    ///
    /// A configured path that cannot be loaded is an error. A machine without any usable system
    /// font falls back to [`FixedAdvance`], which lays text out without drawing it.
    pub fn detect(font_path: Option<&Path>) -> PanelResult<Self> {
        if let Some(path) = font_path {
            return Ok(Self::Font(Box::new(BubbleFont::from_path(path)?)));
        }
        match BubbleFont::system_default() {
            Ok(font) => {
                tracing::debug!(family = font.family(), "using system bubble font");
                Ok(Self::Font(Box::new(font)))
            }
            Err(e) => {
                tracing::warn!(error = %e, "no bubble font available; bubble text will not be drawn");
                Ok(Self::default())
            }
        }
    }

    pub(crate) fn font_mut(&mut self) -> Option<&mut BubbleFont> {
        match self {
            Self::Fixed(_) => None,
            Self::Font(font) => Some(font),
        }
    }

    /// Whether glyphs can be drawn.
    pub fn has_font(&self) -> bool {
        matches!(self, Self::Font(_))
    }
}

impl TextMeasure for TextEngine {
    fn measure(&mut self, text: &str, font_size_px: f64) -> f64 {
        match self {
            Self::Fixed(m) => m.measure(text, font_size_px),
            Self::Font(font) => font.measure(text, font_size_px),
        }
    }
}

impl<T: TextMeasure + ?Sized> TextMeasure for &mut T {
    fn measure(&mut self, text: &str, font_size_px: f64) -> f64 {
        (**self).measure(text, font_size_px)
    }
}
