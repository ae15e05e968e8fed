use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{PanelError, PanelResult};
use crate::model::panel::{AspectRatio, Panel};

/// Snapshot of the studio's work in progress. Loading flags are never persisted.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Draft {
    /// Narrative text.
    pub story: String,
    /// Panels in reading order.
    pub panels: Vec<Panel>,
    /// Ratio new panels are generated at.
    pub aspect_ratio: AspectRatio,
    /// Seconds since the Unix epoch at save time.
    pub saved_at: u64,
}

impl Draft {
    /// Snapshot `story` and `panels`.
    pub fn new(story: impl Into<String>, panels: Vec<Panel>, aspect_ratio: AspectRatio) -> Self {
        Self {
            story: story.into(),
            panels,
            aspect_ratio,
            saved_at: 0,
        }
    }

    /// Parse a draft document.
    pub fn from_json(json: &str) -> PanelResult<Self> {
        serde_json::from_str(json).map_err(|e| PanelError::serde(format!("invalid draft: {e}")))
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> PanelResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PanelError::serde(format!("serialize draft: {e}")))
    }

    /// Stamp `saved_at` and write to `path`, replacing any previous draft.
    #[tracing::instrument(level = "debug", skip(self), fields(path = %path.display()))]
    pub fn save(&mut self, path: &Path) -> PanelResult<()> {
        self.saved_at = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        let json = self.to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("write draft '{}'", path.display()))?;
        Ok(())
    }

    /// Read a draft from `path`.
    pub fn load(path: &Path) -> PanelResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read draft '{}'", path.display()))?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/studio/draft.rs"]
mod tests;
