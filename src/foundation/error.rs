/// Convenience result type used across panelkit.
pub type PanelResult<T> = Result<T, PanelError>;

/// Top-level error taxonomy used by editor, compositor and studio APIs.
#[derive(thiserror::Error, Debug)]
pub enum PanelError {
    /// Invalid user-provided data (unknown aspect ratio, missing image, bad edit document).
    #[error("validation error: {0}")]
    Validation(String),

    /// The source image reference could not be decoded.
    #[error("image load error: {0}")]
    ImageLoad(String),

    /// Errors while rasterizing the flattened panel.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while encoding the flattened panel.
    #[error("encode error: {0}")]
    Encode(String),

    /// Opaque failure reported by the generative backend.
    #[error("backend error: {0}")]
    Backend(String),

    /// Errors when serializing or deserializing drafts and edit documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PanelError {
    /// Build a [`PanelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PanelError::ImageLoad`] value.
    pub fn image_load(msg: impl Into<String>) -> Self {
        Self::ImageLoad(msg.into())
    }

    /// Build a [`PanelError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`PanelError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`PanelError::Backend`] value.
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    /// Build a [`PanelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// True for failures that leave the editor's working copy intact and can be retried.
    pub fn is_image_load(&self) -> bool {
        matches!(self, Self::ImageLoad(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
