use crate::foundation::error::{PanelError, PanelResult};
use crate::model::panel::{AspectRatio, PanelId};
use crate::studio::collection::PanelCollection;

/// External image generator.
///
/// Implementations return self-contained data URIs. Their errors are opaque to the studio and
/// surface as [`PanelError::Backend`].
pub trait GenerativeBackend {
    /// Generate an image for `prompt` in the panel ratio.
    fn generate_image(&mut self, prompt: &str, aspect_ratio: AspectRatio) -> anyhow::Result<String>;

    /// Edit an existing image following `prompt`.
    fn edit_image(&mut self, image_url: &str, prompt: &str) -> anyhow::Result<String>;
}

fn backend_error(e: anyhow::Error) -> PanelError {
    PanelError::backend(format!("{e:#}"))
}

/// Outcome of a [`generate_panels`] run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Panels that received an image.
    pub generated: Vec<PanelId>,
    /// Panels whose generation failed.
    pub failed: Vec<PanelId>,
    /// Whether the run stopped early.
    pub cancelled: bool,
}

/// Generate images for every loading panel, one after another.
///
/// `should_cancel` is polled before and after each request; once it returns `true` the run
/// stops, any late result is discarded and all panels stop loading.
#[tracing::instrument(level = "info", skip_all, fields(panels = collection.panels().len()))]
pub fn generate_panels(
    collection: &mut PanelCollection,
    backend: &mut dyn GenerativeBackend,
    mut should_cancel: impl FnMut() -> bool,
) -> GenerationReport {
    let pending: Vec<(PanelId, String, AspectRatio)> = collection
        .panels()
        .iter()
        .filter(|p| p.is_loading)
        .map(|p| (p.id.clone(), p.description.clone(), p.aspect_ratio))
        .collect();

    let mut report = GenerationReport::default();
    for (id, prompt, ratio) in pending {
        if should_cancel() {
            report.cancelled = true;
            break;
        }
        let result = backend.generate_image(&prompt, ratio).map_err(backend_error);
        if should_cancel() {
            report.cancelled = true;
            break;
        }
        match &result {
            Ok(_) => report.generated.push(id.clone()),
            Err(_) => report.failed.push(id.clone()),
        }
        collection.record_generation(&id, result);
    }

    if report.cancelled {
        collection.cancel_loading();
        tracing::info!("generation cancelled");
    }
    report
}

/// Run an image edit for one panel. On failure the previous image is kept and the error returned.
#[tracing::instrument(level = "info", skip(collection, backend, prompt), fields(panel = %id))]
pub fn remix_panel(
    collection: &mut PanelCollection,
    backend: &mut dyn GenerativeBackend,
    id: &PanelId,
    prompt: &str,
) -> PanelResult<()> {
    let url = collection
        .begin_remix(id)
        .ok_or_else(|| PanelError::validation(format!("panel '{id}' has no image to remix")))?;

    match backend.edit_image(&url, prompt) {
        Ok(new_url) => {
            collection.record_remix(id, Ok(new_url));
            Ok(())
        }
        Err(e) => {
            let msg = format!("{e:#}");
            collection.record_remix(id, Err(PanelError::backend(msg.clone())));
            Err(PanelError::backend(msg))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/studio/backend.rs"]
mod tests;
