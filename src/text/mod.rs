//! Bubble text measurement and the word-wrap layout shared by preview and export.

pub(crate) mod font;
pub(crate) mod measure;
pub(crate) mod wrap;
