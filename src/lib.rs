//! panelkit is the compositing and bubble-editing engine behind a comic panel studio.
//!
//! A panel is a generated image plus an ordered list of text bubbles. The editor works on a copy
//! of that state; saving flattens the copy into one raster image.
//!
//! # Pipeline overview
//!
//! 1. **Edit**: [`PanelEditor`] owns the working copy (bubbles, [`Adjustments`],
//!    [`ViewTransform`]) and turns pointer gestures into bubble geometry.
//! 2. **Preview**: [`PanelEditor::preview`] describes what the live editor shows
//!    ([`PreviewScene`]), including the wrapped text of every bubble and hit testing.
//! 3. **Flatten**: [`Compositor`] renders the same layout with `vello_cpu`: image layer (placed,
//!    clipped, colour filtered) over white, then the bubble layer, at the chosen output scale.
//! 4. **Encode**: the frame becomes a JPEG data URI and is handed back as a [`PanelEdit`].
//!
//! Preview and export share one text layout ([`BubbleTextLayout`]) and one placement function
//! ([`image_placement`]), so the flattened panel matches what was edited.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Premultiplied RGBA8** inside the compositor; encoders un-premultiply on the way out.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod config;
mod editor;
mod foundation;
mod geometry;
mod model;
mod render;
mod studio;
mod text;

pub use assets::decode::{DecodedImage, decode_data_uri, decode_image, parse_data_uri, to_data_uri};
pub use config::{CompositorOpts, ENV_BUBBLE_FONT, ENV_JPEG_QUALITY};
pub use editor::bubbles::BubbleSet;
pub use editor::interaction::{
    GestureMode, Interaction, InteractionState, NoCapture, PointerCapture,
};
pub use editor::preview::{HANDLE_DIAMETER, Hit, PreviewScene, SceneBubble, hit_test};
pub use editor::session::{EditDocument, PanelEdit, PanelEditor};
pub use foundation::core::{Affine, BezPath, Point, Rect, Rgba8, Size, Vec2};
pub use foundation::error::{PanelError, PanelResult};
pub use geometry::bounds::{BubbleBox, MIN_BUBBLE_SIZE};
pub use geometry::frame::{PREVIEW_WIDTH, PreviewFrame, image_placement, output_transform};
pub use geometry::handles::ResizeHandle;
pub use model::adjust::{
    Adjustments, MAX_ADJUST_PERCENT, MAX_PAN_PX, MAX_ROTATION_DEG, ViewTransform, ZOOM_RANGE,
};
pub use model::bubble::{
    BubbleId, BubbleKind, BubbleShape, BubbleStyle, DEFAULT_BUBBLE_ORIGIN, INK, OUTLINE_DASHES,
    OUTLINE_WIDTH, OutlineStyle, TextBubble,
};
pub use model::panel::{AspectRatio, Panel, PanelId};
pub use render::color::{ColorMatrix, apply_adjustments_premul, css_filter_chain};
pub use render::cpu::{CompositeInput, Compositor, FrameRGBA};
pub use render::encode::{DEFAULT_JPEG_QUALITY, ExportFormat};
pub use studio::backend::{GenerationReport, GenerativeBackend, generate_panels, remix_panel};
pub use studio::collection::PanelCollection;
pub use studio::draft::Draft;
pub use studio::script::{SCRIPT_TITLE, script_text};
pub use text::font::BubbleFont;
pub use text::measure::{FixedAdvance, TextEngine, TextMeasure};
pub use text::wrap::{
    BubbleTextLayout, MIN_FONT_SIZE, MIN_LINE_HEIGHT, TEXT_WIDTH_FRACTION, TextLine, font_size_for,
    line_height_for, wrap_words,
};
