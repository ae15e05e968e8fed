use std::sync::Arc;

use base64::Engine as _;

use crate::foundation::core::Size;
use crate::foundation::error::{PanelError, PanelResult};
use crate::foundation::math::premultiply_rgba8_in_place;

/// Decoded raster ready for compositing.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8, row-major.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl DecodedImage {
    /// Pixel size as a kurbo size.
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Split a `data:<mime>;base64,<payload>` URI into its MIME type and decoded payload.
pub fn parse_data_uri(uri: &str) -> PanelResult<(String, Vec<u8>)> {
    let rest = uri
        .trim()
        .strip_prefix("data:")
        .ok_or_else(|| PanelError::image_load("image url is not a data uri"))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| PanelError::image_load("data uri has no payload separator"))?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or_else(|| PanelError::image_load("data uri payload is not base64"))?;

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| PanelError::image_load(format!("invalid base64 payload: {e}")))?;
    Ok((mime.to_string(), bytes))
}

/// Wrap encoded bytes as a base64 data URI.
pub fn to_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!(
        "data:{mime};base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

/// Decode encoded image bytes (PNG, JPEG, ...) into premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> PanelResult<DecodedImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| PanelError::image_load(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(DecodedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

/// Decode a panel image URL.
#[tracing::instrument(level = "debug", skip(uri), fields(len = uri.len()))]
pub fn decode_data_uri(uri: &str) -> PanelResult<DecodedImage> {
    let (mime, bytes) = parse_data_uri(uri)?;
    let img = decode_image(&bytes)?;
    tracing::debug!(%mime, width = img.width, height = img.height, "decoded panel image");
    Ok(img)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
