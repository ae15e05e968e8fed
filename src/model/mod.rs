pub(crate) mod adjust;
pub(crate) mod bubble;
pub(crate) mod panel;
