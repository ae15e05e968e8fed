//! Raster pipeline: colour filter, premultiplied compositing, the CPU compositor and encoders.

pub(crate) mod color;
pub(crate) mod composite;
pub(crate) mod cpu;
pub(crate) mod encode;
