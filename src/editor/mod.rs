//! The interactive panel editor: working-copy bubbles, pointer gestures and the preview scene.

pub(crate) mod bubbles;
pub(crate) mod interaction;
pub(crate) mod preview;
pub(crate) mod session;
