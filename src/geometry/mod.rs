//! Pure coordinate math shared by the editor, the preview scene and the compositor.

pub(crate) mod bounds;
pub(crate) mod frame;
pub(crate) mod handles;
