use std::path::Path;

use crate::foundation::{
    core::GrayMatrix,
    error::{TankError, TankResult},
};

/// Open and decode the image at `path` into an 8-bit grayscale matrix.
///
/// The format is guessed from the file contents, so a PNG named `.jpg` still loads.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_gray(path: impl AsRef<Path>) -> TankResult<GrayMatrix> {
    let path = path.as_ref();
    let reader = image::ImageReader::open(path)
        .map_err(|e| TankError::io(format!("open '{}': {e}", path.display())))?
        .with_guessed_format()
        .map_err(|e| TankError::io(format!("read '{}': {e}", path.display())))?;
    let dyn_img = reader
        .decode()
        .map_err(|e| TankError::decode(format!("'{}': {e}", path.display())))?;
    gray_from_dynamic(&dyn_img)
}

/// Decode encoded image bytes into an 8-bit grayscale matrix.
pub fn decode_gray(bytes: &[u8]) -> TankResult<GrayMatrix> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| TankError::decode(format!("image from memory: {e}")))?;
    gray_from_dynamic(&dyn_img)
}

/// Convert any decoded image to luma, discarding chroma and alpha.
pub fn gray_from_dynamic(img: &image::DynamicImage) -> TankResult<GrayMatrix> {
    let rgba = img.to_rgba16();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(TankError::decode(format!(
            "image has no pixels ({width}x{height})"
        )));
    }

    let data = rgba.pixels().map(|px| luma_bt601(px.0)).collect();
    tracing::debug!(width, height, "decoded grayscale layer");
    GrayMatrix::from_raw(width, height, data)
}

/// BT.601 luma of a straight-alpha 16-bit pixel, with color premultiplied first.
///
/// Weights sum to 65536 so the `>> 24` lands back on the 8-bit scale.
pub fn luma_bt601(rgba16: [u16; 4]) -> u8 {
    let [r, g, b, a] = rgba16.map(u32::from);
    let r = premul16(r, a);
    let g = premul16(g, a);
    let b = premul16(b, a);
    ((19595 * r + 38470 * g + 7471 * b + (1 << 15)) >> 24) as u8
}

fn premul16(c: u32, a: u32) -> u32 {
    c * a / 0xffff
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
