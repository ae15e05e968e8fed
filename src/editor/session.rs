use crate::assets::decode::decode_data_uri;
use crate::editor::bubbles::BubbleSet;
use crate::editor::interaction::{GestureMode, Interaction, InteractionState, NoCapture, PointerCapture};
use crate::editor::preview::{Hit, PreviewScene, hit_test};
use crate::foundation::core::{Point, Size};
use crate::foundation::error::{PanelError, PanelResult};
use crate::geometry::frame::{PREVIEW_WIDTH, PreviewFrame};
use crate::model::adjust::{Adjustments, ViewTransform};
use crate::model::bubble::{BubbleId, BubbleKind, TextBubble};
use crate::model::panel::{AspectRatio, Panel, PanelId};
use crate::render::cpu::{CompositeInput, Compositor, FrameRGBA};
use crate::text::measure::TextMeasure;

/// Result of a successful save, handed back to the panel collection.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelEdit {
    /// Panel the edit belongs to.
    pub panel_id: PanelId,
    /// Flattened image as a data URI.
    pub image_url: String,
    /// Bubbles to persist.
    pub bubbles: Vec<TextBubble>,
}

/// Serializable working-copy state: everything an editing session changes on a panel.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditDocument {
    /// Colour adjustments.
    pub adjustments: Adjustments,
    /// Image transform and output scale.
    pub transform: ViewTransform,
    /// Bubbles in paint order.
    pub bubbles: Vec<TextBubble>,
}

impl EditDocument {
    /// Parse an edit document.
    pub fn from_json(json: &str) -> PanelResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| PanelError::serde(format!("invalid edit document: {e}")))
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> PanelResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PanelError::serde(format!("serialize edit document: {e}")))
    }
}

/// One editing session over a panel snapshot.
///
/// Holds the working copy (bubbles, adjustments, transform); the panel itself only changes when
/// the caller applies the [`PanelEdit`] returned by [`PanelEditor::save`]. Dropping the editor
/// discards the working copy and releases any pointer capture.
#[derive(Debug)]
pub struct PanelEditor<C: PointerCapture = NoCapture> {
    panel_id: PanelId,
    aspect_ratio: AspectRatio,
    image_url: Option<String>,
    image_size: Option<Size>,
    frame: PreviewFrame,
    bubbles: BubbleSet,
    adjustments: Adjustments,
    transform: ViewTransform,
    interaction: Interaction<C>,
}

impl PanelEditor<NoCapture> {
    /// Open a headless session at the default preview width.
    pub fn open(panel: &Panel) -> Self {
        Self::open_with(panel, PREVIEW_WIDTH, NoCapture)
    }
}

impl<C: PointerCapture> PanelEditor<C> {
    /// Open a session with a host pointer capture and preview width.
    #[tracing::instrument(level = "debug", skip(panel, capture), fields(panel = %panel.id))]
    pub fn open_with(panel: &Panel, preview_width: f64, capture: C) -> Self {
        let width = if preview_width.is_finite() && preview_width > 0.0 {
            preview_width
        } else {
            PREVIEW_WIDTH
        };
        Self {
            panel_id: panel.id.clone(),
            aspect_ratio: panel.aspect_ratio,
            image_url: panel.image_url.clone(),
            image_size: None,
            frame: panel.aspect_ratio.frame(width),
            bubbles: BubbleSet::from_bubbles(panel.bubbles.clone()),
            adjustments: Adjustments::default(),
            transform: ViewTransform::default(),
            interaction: Interaction::new(capture),
        }
    }

    /// Panel being edited.
    pub fn panel_id(&self) -> &PanelId {
        &self.panel_id
    }

    /// Panel frame ratio.
    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect_ratio
    }

    /// Preview frame of this session.
    pub fn frame(&self) -> PreviewFrame {
        self.frame
    }

    /// Working-copy bubbles in paint order.
    pub fn bubbles(&self) -> &[TextBubble] {
        self.bubbles.as_slice()
    }

    /// Look up a working-copy bubble.
    pub fn bubble(&self, id: &BubbleId) -> Option<&TextBubble> {
        self.bubbles.get(id)
    }

    /// Selected bubble.
    pub fn selected(&self) -> Option<&BubbleId> {
        self.bubbles.selected()
    }

    /// Gesture state.
    pub fn state(&self) -> InteractionState {
        self.interaction.state()
    }

    /// Add a bubble with kind defaults; it becomes selected.
    pub fn add_bubble(&mut self, kind: BubbleKind) -> BubbleId {
        self.bubbles.add(kind)
    }

    /// Remove a bubble; ends a gesture targeting it. Unknown ids are a no-op.
    pub fn remove_bubble(&mut self, id: &BubbleId) -> Option<TextBubble> {
        let removed = self.bubbles.remove(id)?;
        self.interaction.end_if_targets(id);
        Some(removed)
    }

    /// Replace a bubble's text.
    pub fn update_text(&mut self, id: &BubbleId, text: impl Into<String>) -> bool {
        self.bubbles.update_text(id, text)
    }

    /// Select a bubble without starting a gesture.
    pub fn select(&mut self, id: &BubbleId) -> bool {
        self.bubbles.select(id)
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.bubbles.clear_selection();
    }

    /// Handle a pointer-down on an already hit-tested target.
    ///
    /// Ignored while a gesture is active.
    pub fn pointer_down(&mut self, hit: Hit, pointer: Point) -> InteractionState {
        if self.interaction.is_active() {
            return self.interaction.state();
        }
        match hit {
            Hit::Handle(id, handle) => {
                if self.bubbles.select(&id) {
                    self.interaction
                        .begin(id, GestureMode::Resize(handle), pointer);
                }
            }
            Hit::Body(id) => {
                if self.bubbles.select(&id) {
                    self.interaction.begin(id, GestureMode::Drag, pointer);
                }
            }
            Hit::Empty => self.bubbles.clear_selection(),
        }
        self.interaction.state()
    }

    /// Hit-test `pointer` and handle the pointer-down.
    pub fn pointer_down_at(&mut self, pointer: Point) -> InteractionState {
        let hit = hit_test(self.bubbles.as_slice(), self.bubbles.selected(), pointer);
        self.pointer_down(hit, pointer)
    }

    /// Feed a pointer move into the active gesture.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        self.interaction.update(pointer, &mut self.bubbles).is_some()
    }

    /// Finish the active gesture.
    pub fn pointer_up(&mut self) {
        self.interaction.end();
    }

    /// Current colour adjustments.
    pub fn adjustments(&self) -> Adjustments {
        self.adjustments
    }

    /// Replace the adjustments, clamping into range.
    pub fn set_adjustments(&mut self, adjustments: Adjustments) {
        self.adjustments = adjustments.clamped();
    }

    /// Current image transform and output scale.
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    /// Replace the transform, clamping into range.
    pub fn set_transform(&mut self, transform: ViewTransform) {
        self.transform = transform.clamped();
    }

    /// Rotate the image a further quarter turn.
    pub fn rotate_quarter_turn(&mut self) {
        self.transform.rotate_quarter_turn();
    }

    /// Source size, when known.
    pub fn image_size(&self) -> Option<Size> {
        self.image_size
    }

    /// Record the source size reported by the host.
    pub fn set_image_size(&mut self, size: Size) {
        self.image_size = Some(size);
    }

    /// Decode the source once to learn its size.
    pub fn probe_image(&mut self) -> PanelResult<Size> {
        let url = self
            .image_url
            .as_deref()
            .ok_or_else(|| PanelError::validation("panel has no image"))?;
        let size = decode_data_uri(url)?.size();
        self.image_size = Some(size);
        Ok(size)
    }

    /// Build the live preview with `measure`, which must be the measurer the compositor uses.
    pub fn preview(&self, measure: &mut dyn TextMeasure) -> PreviewScene {
        PreviewScene::build(
            self.frame,
            self.image_size,
            self.adjustments,
            self.transform,
            self.bubbles.as_slice(),
            self.bubbles.selected(),
            measure,
        )
    }

    /// Snapshot the working copy as an edit document.
    pub fn document(&self) -> EditDocument {
        EditDocument {
            adjustments: self.adjustments,
            transform: self.transform,
            bubbles: self.bubbles.as_slice().to_vec(),
        }
    }

    /// Replace the working copy with `doc`, clamping every value. Ends any active gesture.
    pub fn apply_document(&mut self, doc: EditDocument) {
        self.interaction.end();
        self.adjustments = doc.adjustments.clamped();
        self.transform = doc.transform.clamped();
        self.bubbles = BubbleSet::from_bubbles(doc.bubbles);
    }

    /// Flatten the working copy into pixels.
    pub fn render(&self, compositor: &mut Compositor) -> PanelResult<FrameRGBA> {
        let url = self
            .image_url
            .as_deref()
            .ok_or_else(|| PanelError::validation("panel has no image to flatten"))?;
        let image = decode_data_uri(url)?;
        compositor.render(&CompositeInput {
            frame: self.frame,
            image: &image,
            adjustments: self.adjustments,
            transform: self.transform,
            bubbles: self.bubbles.as_slice(),
        })
    }

    /// Flatten and encode the working copy.
    ///
    /// On error the working copy is left untouched so the user can retry or keep editing.
    #[tracing::instrument(level = "info", skip(self, compositor), fields(panel = %self.panel_id))]
    pub fn save(&self, compositor: &mut Compositor) -> PanelResult<PanelEdit> {
        let frame = self.render(compositor)?;
        let image_url = compositor.export_format().data_uri(&frame)?;
        tracing::info!(bubbles = self.bubbles.len(), "panel flattened");

        Ok(PanelEdit {
            panel_id: self.panel_id.clone(),
            image_url,
            bubbles: self.bubbles.as_slice().to_vec(),
        })
    }

    /// End the session, discarding the working copy.
    pub fn close(self) {
        tracing::debug!(panel = %self.panel_id, "editor closed");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/session.rs"]
mod tests;
