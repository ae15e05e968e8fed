use crate::editor::session::PanelEdit;
use crate::foundation::error::{PanelError, PanelResult};
use crate::model::panel::{AspectRatio, Panel, PanelId};

/// Ordered panels of one comic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PanelCollection {
    panels: Vec<Panel>,
    batch: u64,
}

impl PanelCollection {
    /// Wrap existing panels (for example from a draft).
    pub fn from_panels(panels: Vec<Panel>) -> Self {
        Self { panels, batch: 0 }
    }

    /// Panels in reading order.
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Look up a panel.
    pub fn get(&self, id: &PanelId) -> Option<&Panel> {
        self.panels.iter().find(|p| &p.id == id)
    }

    fn get_mut(&mut self, id: &PanelId) -> Option<&mut Panel> {
        self.panels.iter_mut().find(|p| &p.id == id)
    }

    /// True while any panel awaits an image.
    pub fn is_loading(&self) -> bool {
        self.panels.iter().any(|p| p.is_loading)
    }

    /// Replace the collection with one loading placeholder per description.
    pub fn start_generation<I, S>(&mut self, descriptions: I, aspect_ratio: AspectRatio) -> Vec<PanelId>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.batch += 1;
        let batch = self.batch;
        self.panels = descriptions
            .into_iter()
            .enumerate()
            .map(|(i, desc)| {
                let mut p = Panel::new(PanelId::new(format!("panel-{batch}-{i}")), desc, aspect_ratio);
                p.is_loading = true;
                p
            })
            .collect();
        tracing::debug!(count = self.panels.len(), batch, "panel placeholders created");
        self.panels.iter().map(|p| p.id.clone()).collect()
    }

    /// Record a generation outcome. Failure leaves the panel not loading and without an image.
    pub fn record_generation(&mut self, id: &PanelId, result: PanelResult<String>) {
        let Some(panel) = self.get_mut(id) else {
            return;
        };
        panel.is_loading = false;
        match result {
            Ok(url) => panel.image_url = Some(url),
            Err(e) => tracing::warn!(panel = %id, error = %e, "panel generation failed"),
        }
    }

    /// Mark a panel as being remixed and hand back its current image.
    ///
    /// Returns `None` when the panel is unknown or has no image yet.
    pub fn begin_remix(&mut self, id: &PanelId) -> Option<String> {
        let panel = self.get_mut(id)?;
        let url = panel.image_url.clone()?;
        panel.is_loading = true;
        Some(url)
    }

    /// Record a remix outcome. Failure keeps the previous image.
    pub fn record_remix(&mut self, id: &PanelId, result: PanelResult<String>) {
        let Some(panel) = self.get_mut(id) else {
            return;
        };
        panel.is_loading = false;
        match result {
            Ok(url) => panel.image_url = Some(url),
            Err(e) => tracing::warn!(panel = %id, error = %e, "panel remix failed"),
        }
    }

    /// Apply a saved editor result: new flattened image and persisted bubbles.
    pub fn apply_edit(&mut self, edit: PanelEdit) -> PanelResult<()> {
        let panel = self
            .get_mut(&edit.panel_id)
            .ok_or_else(|| PanelError::validation(format!("unknown panel '{}'", edit.panel_id)))?;
        panel.image_url = Some(edit.image_url);
        panel.bubbles = edit.bubbles;
        Ok(())
    }

    /// Stop waiting on every outstanding image operation.
    pub fn cancel_loading(&mut self) {
        for p in &mut self.panels {
            p.is_loading = false;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/studio/collection.rs"]
mod tests;
