use crate::foundation::core::{Affine, Point, Rect, Size};
use crate::geometry::frame::PreviewFrame;
use crate::geometry::handles::ResizeHandle;
use crate::model::adjust::{Adjustments, ViewTransform};
use crate::model::bubble::{BubbleId, BubbleKind, BubbleStyle, TextBubble};
use crate::text::measure::TextMeasure;
use crate::text::wrap::BubbleTextLayout;

/// Diameter of the resize handle discs, in preview pixels.
pub const HANDLE_DIAMETER: f64 = 16.0;

/// What a pointer-down landed on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Hit {
    /// A resize handle of the selected bubble.
    Handle(BubbleId, ResizeHandle),
    /// The painted body of a bubble.
    Body(BubbleId),
    /// Nothing.
    Empty,
}

/// Hit-test `p` against bubbles in paint order.
///
/// The selected bubble's handles win over every body; bodies are tested from the topmost down.
pub fn hit_test(bubbles: &[TextBubble], selected: Option<&BubbleId>, p: Point) -> Hit {
    if let Some(b) = selected.and_then(|id| bubbles.iter().find(|b| &b.id == id)) {
        let r = HANDLE_DIAMETER / 2.0;
        for h in ResizeHandle::ALL {
            if h.anchor(b.bounds).distance(p) <= r {
                return Hit::Handle(b.id.clone(), h);
            }
        }
    }

    bubbles
        .iter()
        .rev()
        .find(|b| b.contains(p))
        .map_or(Hit::Empty, |b| Hit::Body(b.id.clone()))
}

/// One bubble as the live editor shows it.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneBubble {
    /// Bubble id.
    pub id: BubbleId,
    /// Bubble kind.
    pub kind: BubbleKind,
    /// Bounding box in preview space.
    pub rect: Rect,
    /// Shape, outline and fill.
    pub style: &'static BubbleStyle,
    /// Whether this is the selected bubble.
    pub selected: bool,
    /// Wrapped, centred text.
    pub text: BubbleTextLayout,
}

/// Declarative description of the live preview, built from an editor's working copy.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewScene {
    /// Preview frame.
    pub frame: PreviewFrame,
    /// Image-to-preview placement, once the source size is known.
    pub image_affine: Option<Affine>,
    /// CSS `filter` equivalent of the adjustments.
    pub css_filter: String,
    /// Bubbles in paint order.
    pub bubbles: Vec<SceneBubble>,
    /// Handle centres of the selected bubble.
    pub handles: Vec<(ResizeHandle, Point)>,
    selected: Option<BubbleId>,
    raw: Vec<TextBubble>,
}

impl PreviewScene {
    pub(crate) fn build(
        frame: PreviewFrame,
        image_size: Option<Size>,
        adjustments: Adjustments,
        transform: ViewTransform,
        bubbles: &[TextBubble],
        selected: Option<&BubbleId>,
        measure: &mut dyn TextMeasure,
    ) -> Self {
        let scene_bubbles = bubbles
            .iter()
            .map(|b| SceneBubble {
                id: b.id.clone(),
                kind: b.kind,
                rect: b.bounds.to_rect(),
                style: b.style(),
                selected: selected == Some(&b.id),
                text: BubbleTextLayout::new(b.bounds, &b.text, measure),
            })
            .collect();

        let handles = selected
            .and_then(|id| bubbles.iter().find(|b| &b.id == id))
            .map(|b| {
                ResizeHandle::ALL
                    .into_iter()
                    .map(|h| (h, h.anchor(b.bounds)))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            frame,
            image_affine: image_size.map(|s| transform.image_affine(frame, s)),
            css_filter: adjustments.css_filter(),
            bubbles: scene_bubbles,
            handles,
            selected: selected.cloned(),
            raw: bubbles.to_vec(),
        }
    }

    /// What a pointer-down at `p` would hit.
    pub fn hit_test(&self, p: Point) -> Hit {
        hit_test(&self.raw, self.selected.as_ref(), p)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/preview.rs"]
mod tests;
