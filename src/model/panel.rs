use std::str::FromStr;

use crate::foundation::error::PanelError;
use crate::geometry::frame::PreviewFrame;
use crate::model::bubble::TextBubble;

/// Stable panel identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PanelId(pub String);

impl PanelId {
    /// Build an identifier from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PanelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Panel frame ratios supported by the generator and the editor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum AspectRatio {
    /// Square.
    #[default]
    #[serde(rename = "1:1")]
    Square,
    /// Portrait 3:4.
    #[serde(rename = "3:4")]
    Portrait,
    /// Landscape 4:3.
    #[serde(rename = "4:3")]
    Landscape,
    /// Widescreen 16:9.
    #[serde(rename = "16:9")]
    Wide,
}

impl AspectRatio {
    /// Every supported ratio.
    pub const ALL: [Self; 4] = [Self::Square, Self::Portrait, Self::Landscape, Self::Wide];

    /// `(width, height)` ratio terms.
    pub fn terms(self) -> (u32, u32) {
        match self {
            Self::Square => (1, 1),
            Self::Portrait => (3, 4),
            Self::Landscape => (4, 3),
            Self::Wide => (16, 9),
        }
    }

    /// The `"w:h"` label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::Portrait => "3:4",
            Self::Landscape => "4:3",
            Self::Wide => "16:9",
        }
    }

    /// Preview frame of the given logical width.
    pub fn frame(self, preview_width: f64) -> PreviewFrame {
        let (w, h) = self.terms();
        PreviewFrame::from_ratio(preview_width, w, h)
    }
}

impl FromStr for AspectRatio {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s.trim())
            .ok_or_else(|| {
                PanelError::validation(format!(
                    "unsupported aspect ratio '{s}' (expected 1:1, 3:4, 4:3 or 16:9)"
                ))
            })
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One comic panel as held by the panel collection.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Panel {
    /// Stable identifier.
    pub id: PanelId,
    /// Prompt the image was generated from.
    #[serde(default)]
    pub description: String,
    /// Current raster source as a data URI; `None` while pending or after a failed generation.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Frame ratio, fixed for the panel's lifetime.
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
    /// Persisted bubbles in paint order.
    #[serde(default)]
    pub bubbles: Vec<TextBubble>,
    /// True while an image operation is outstanding. Never persisted.
    #[serde(skip)]
    pub is_loading: bool,
}

impl Panel {
    /// A panel with no image yet.
    pub fn new(id: PanelId, description: impl Into<String>, aspect_ratio: AspectRatio) -> Self {
        Self {
            id,
            description: description.into(),
            image_url: None,
            aspect_ratio,
            bubbles: Vec::new(),
            is_loading: false,
        }
    }

    /// Builder-style image assignment.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Generation finished without an image and nothing is pending.
    pub fn is_failed(&self) -> bool {
        !self.is_loading && self.image_url.is_none()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/panel.rs"]
mod tests;
