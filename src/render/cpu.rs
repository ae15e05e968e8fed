use std::sync::Arc;

use kurbo::Shape;

use crate::assets::decode::{DecodedImage, decode_data_uri};
use crate::config::CompositorOpts;
use crate::foundation::core::{Affine, BezPath, Rgba8};
use crate::foundation::error::{PanelError, PanelResult};
use crate::geometry::frame::{PreviewFrame, output_transform};
use crate::model::adjust::{Adjustments, ViewTransform};
use crate::model::bubble::{BubbleShape, INK, OUTLINE_DASHES, OUTLINE_WIDTH, OutlineStyle, TextBubble};
use crate::render::color::apply_adjustments_premul;
use crate::render::composite::{filled, over_in_place};
use crate::render::encode::ExportFormat;
use crate::text::font::TextBrushRgba8;
use crate::text::measure::TextEngine;
use crate::text::wrap::BubbleTextLayout;

/// A rendered frame in CPU memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Premultiplied pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }
}

/// Everything one flatten needs.
#[derive(Clone, Copy, Debug)]
pub struct CompositeInput<'a> {
    /// Preview frame the working copy was edited in.
    pub frame: PreviewFrame,
    /// Decoded source image.
    pub image: &'a DecodedImage,
    /// Colour filter for the image layer.
    pub adjustments: Adjustments,
    /// Image placement and output scale.
    pub transform: ViewTransform,
    /// Bubbles in paint order.
    pub bubbles: &'a [TextBubble],
}

/// CPU compositor powered by `vello_cpu`.
///
/// Pipeline: white base, image layer (placed, clipped to the frame, colour filtered) composited
/// over it, then the bubble layer, all at `outputScale / 100` of preview resolution.
pub struct Compositor {
    opts: CompositorOpts,
    text: TextEngine,
    ctx: Option<vello_cpu::RenderContext>,
}

impl std::fmt::Debug for Compositor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compositor")
            .field("opts", &self.opts)
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}

impl Compositor {
    /// Build a compositor drawing bubble text with the configured font, or a system font when
    /// none is configured.
    pub fn new(opts: CompositorOpts) -> PanelResult<Self> {
        let text = TextEngine::detect(opts.font_path())?;
        Ok(Self::with_text_engine(opts, text))
    }

    /// Build a compositor around an explicit text engine.
    pub fn with_text_engine(opts: CompositorOpts, text: TextEngine) -> Self {
        Self {
            opts,
            text,
            ctx: None,
        }
    }

    /// Active options.
    pub fn opts(&self) -> &CompositorOpts {
        &self.opts
    }

    /// The measurer bubble text is wrapped with. Hand the same one to the live preview.
    pub fn text_engine_mut(&mut self) -> &mut TextEngine {
        &mut self.text
    }

    /// Default export format (JPEG at the configured quality).
    pub fn export_format(&self) -> ExportFormat {
        ExportFormat::Jpeg {
            quality: self.opts.jpeg_quality,
        }
    }

    /// Flatten one panel into pixels.
    #[tracing::instrument(
        level = "debug",
        skip(self, input),
        fields(bubbles = input.bubbles.len(), scale = input.transform.output_scale)
    )]
    pub fn render(&mut self, input: &CompositeInput<'_>) -> PanelResult<FrameRGBA> {
        let adjustments = input.adjustments.clamped();
        let transform = input.transform.clamped();
        let scale = transform.output_factor();
        let (width, height) = input.frame.output_size(scale);
        let (w16, h16) = surface_dims(width, height)?;

        let mut out = filled(width, height, self.opts.clear.to_premul_bytes())?;
        let base = output_transform(scale);

        let image = image_paint(input.image)?;
        let placement = base * transform.image_affine(input.frame, input.image.size());
        let clip = bezpath_to_cpu(&input.frame.rect().to_path(0.1));
        let (iw, ih) = (f64::from(input.image.width), f64::from(input.image.height));

        let mut layer = vello_cpu::Pixmap::new(w16, h16);
        self.with_ctx_mut(w16, h16, |_, ctx| {
            ctx.set_transform(affine_to_cpu(base));
            ctx.push_clip_layer(&clip);
            ctx.set_transform(affine_to_cpu(placement));
            ctx.set_paint(image);
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, iw, ih));
            ctx.pop_layer();
            ctx.flush();
            ctx.render_to_pixmap(&mut layer);
            Ok(())
        })?;
        apply_adjustments_premul(layer.data_as_u8_slice_mut(), adjustments);
        over_in_place(&mut out, layer.data_as_u8_slice())?;

        if !input.bubbles.is_empty() {
            if !self.text.has_font() && input.bubbles.iter().any(|b| !b.text.trim().is_empty()) {
                tracing::warn!("no bubble font configured; bubble text is laid out but not drawn");
            }

            let mut layer = vello_cpu::Pixmap::new(w16, h16);
            self.with_ctx_mut(w16, h16, |this, ctx| {
                for bubble in input.bubbles {
                    this.draw_bubble(ctx, base, bubble);
                }
                ctx.flush();
                ctx.render_to_pixmap(&mut layer);
                Ok(())
            })?;
            over_in_place(&mut out, layer.data_as_u8_slice())?;
        }

        Ok(FrameRGBA {
            width,
            height,
            data: out,
            premultiplied: true,
        })
    }

    /// Decode `image_url` and flatten it with the given working copy.
    pub fn render_data_uri(
        &mut self,
        image_url: &str,
        frame: PreviewFrame,
        adjustments: Adjustments,
        transform: ViewTransform,
        bubbles: &[TextBubble],
    ) -> PanelResult<FrameRGBA> {
        let image = decode_data_uri(image_url)?;
        self.render(&CompositeInput {
            frame,
            image: &image,
            adjustments,
            transform,
            bubbles,
        })
    }

    /// Flatten and encode with the default export format, returning a data URI.
    pub fn export(&mut self, input: &CompositeInput<'_>) -> PanelResult<String> {
        let frame = self.render(input)?;
        self.export_format().data_uri(&frame)
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> PanelResult<R>,
    ) -> PanelResult<R> {
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(self, &mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    fn draw_bubble(&mut self, ctx: &mut vello_cpu::RenderContext, base: Affine, bubble: &TextBubble) {
        let style = bubble.style();
        let rect = bubble.bounds.to_rect();
        let outline = match style.shape {
            BubbleShape::Ellipse => kurbo::Ellipse::from_rect(rect).to_path(0.1),
            BubbleShape::Rect => rect.to_path(0.1),
        };

        ctx.set_transform(affine_to_cpu(base));
        ctx.set_paint(color_to_cpu(style.fill));
        ctx.fill_path(&bezpath_to_cpu(&outline));

        let stroked = match style.outline {
            OutlineStyle::Solid => outline,
            OutlineStyle::Dashed => kurbo::dash(outline.iter(), 0.0, &OUTLINE_DASHES).collect(),
        };
        ctx.set_stroke(vello_cpu::kurbo::Stroke::new(OUTLINE_WIDTH));
        ctx.set_paint(color_to_cpu(INK));
        ctx.stroke_path(&bezpath_to_cpu(&stroked));

        let layout = BubbleTextLayout::new(bubble.bounds, &bubble.text, &mut self.text);
        let Some(font) = self.text.font_mut() else {
            return;
        };
        let brush = TextBrushRgba8 {
            r: INK.r,
            g: INK.g,
            b: INK.b,
            a: INK.a,
        };
        for line in &layout.lines {
            let shaped = font.shape_line(&line.text, layout.font_size as f32, brush);
            // Middle baseline: the shaped line box is centred on the line centre.
            let origin = Affine::translate((
                line.left(),
                line.center.y - f64::from(shaped.height()) / 2.0,
            ));
            ctx.set_transform(affine_to_cpu(base * origin));
            ctx.set_paint(color_to_cpu(INK));
            for shaped_line in shaped.lines() {
                for item in shaped_line.items() {
                    let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                        continue;
                    };
                    let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    });
                    ctx.glyph_run(font.data())
                        .font_size(run.run().font_size())
                        .fill_glyphs(glyphs);
                }
            }
        }
    }
}

fn surface_dims(width: u32, height: u32) -> PanelResult<(u16, u16)> {
    let w: u16 = width
        .try_into()
        .map_err(|_| PanelError::render("output width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| PanelError::render("output height exceeds u16"))?;
    Ok((w, h))
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> PanelResult<vello_cpu::Pixmap> {
    let (w, h) = surface_dims(width, height)
        .map_err(|_| PanelError::render("source image exceeds u16 dimensions"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(PanelError::render("pixmap byte len mismatch"));
    }
    // Pixmap stores PremulRgba8; our bytes are already premultiplied.
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]]))
        .collect();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels, w, h, true,
    ))
}

fn image_paint(img: &DecodedImage) -> PanelResult<vello_cpu::Image> {
    let pixmap = pixmap_from_premul_bytes(&img.rgba8_premul, img.width, img.height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
