use std::path::Path;

use crate::foundation::error::{PanelError, PanelResult};
use crate::text::measure::TextMeasure;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub(crate) struct TextBrushRgba8 {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

/// A single font face registered with Parley, used bold for bubble text.
pub struct BubbleFont {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family: String,
    data: vello_cpu::peniko::FontData,
}

impl BubbleFont {
    /// Register a font face from raw TTF/OTF bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> PanelResult<Self> {
        Self::from_face(bytes, 0)
    }

    /// Register face `index` of a font file or collection (TTC).
    pub fn from_face(bytes: Vec<u8>, index: u32) -> PanelResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let family_id = families
            .iter()
            .find(|(_, fonts)| fonts.iter().any(|f| f.index() == index))
            .or_else(|| families.first())
            .map(|(id, _)| *id)
            .ok_or_else(|| PanelError::validation("no font families registered from font bytes"))?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| PanelError::validation("registered font family has no name"))?
            .to_string();

        let data = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), index);
        tracing::debug!(family = %family, "registered bubble font");

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family,
            data,
        })
    }

    /// Read and register a font file.
    pub fn from_path(path: &Path) -> PanelResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            PanelError::validation(format!("failed to read font '{}': {e}", path.display()))
        })?;
        Self::from_bytes(bytes)
    }

    /// Resolve a bold sans-serif face from the fonts installed on this machine.
    pub fn system_default() -> PanelResult<Self> {
        use usvg::fontdb::{Database, Family, Query, Weight};

        let mut db = Database::new();
        db.load_system_fonts();

        let candidates = [
            Family::SansSerif,
            Family::Name("DejaVu Sans"),
            Family::Name("Liberation Sans"),
            Family::Name("Noto Sans"),
            Family::Name("Helvetica"),
        ];
        let id = candidates
            .iter()
            .find_map(|family| {
                db.query(&Query {
                    families: std::slice::from_ref(family),
                    weight: Weight::BOLD,
                    ..Default::default()
                })
            })
            .or_else(|| db.faces().next().map(|face| face.id))
            .ok_or_else(|| PanelError::validation("no system fonts found"))?;

        let (bytes, index) = db
            .with_face_data(id, |data, index| (data.to_vec(), index))
            .ok_or_else(|| PanelError::validation("system font data is unavailable"))?;
        Self::from_face(bytes, index)
    }

    /// Family name the face registered under.
    pub fn family(&self) -> &str {
        &self.family
    }

    pub(crate) fn data(&self) -> &vello_cpu::peniko::FontData {
        &self.data
    }

    /// Shape one unbroken line of bold text.
    pub(crate) fn shape_line(
        &mut self,
        text: &str,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> parley::Layout<TextBrushRgba8> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            parley::style::FontWeight::BOLD,
        ));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }
}

impl TextMeasure for BubbleFont {
    fn measure(&mut self, text: &str, font_size_px: f64) -> f64 {
        if text.is_empty() || !font_size_px.is_finite() || font_size_px <= 0.0 {
            return 0.0;
        }
        f64::from(
            self.shape_line(text, font_size_px as f32, TextBrushRgba8::default())
                .width(),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
