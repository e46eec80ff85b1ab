use rayon::prelude::*;

use crate::foundation::{
    core::{CompositeImage, GrayMatrix},
    error::{TankError, TankResult},
};

/// Straight-alpha RGBA for one (top, bottom) luminance pair.
///
/// `alpha = 255 - (top - bottom)` in wrapping 8-bit arithmetic. Where the layers
/// cancel exactly (`alpha == 255`) the pixel is fully transparent. Otherwise the
/// bottom value is un-multiplied by `alpha` in `f32` and truncated, saturating at 255.
pub fn merge_pixel(top: u8, bottom: u8) -> [u8; 4] {
    let alpha = 255u8.wrapping_sub(top.wrapping_sub(bottom));
    match alpha {
        // 255: layers cancel. 0: nothing to divide by.
        0 | 255 => [0, 0, 0, 0],
        _ => {
            let gray = (f32::from(bottom) / f32::from(alpha) * 255.0) as u8;
            [gray, gray, gray, alpha]
        }
    }
}

/// Merge two unified layers into one composite image.
pub fn merge(top: &GrayMatrix, bottom: &GrayMatrix) -> TankResult<CompositeImage> {
    let mut out = prepare_output(top, bottom)?;
    let width = top.width() as usize;
    for ((dst, t), b) in out
        .data
        .chunks_exact_mut(width * 4)
        .zip(top.rows())
        .zip(bottom.rows())
    {
        merge_row(dst, t, b);
    }
    Ok(out)
}

/// Row-parallel [`merge`]; runs on the current rayon pool.
pub fn merge_parallel(top: &GrayMatrix, bottom: &GrayMatrix) -> TankResult<CompositeImage> {
    let mut out = prepare_output(top, bottom)?;
    let width = top.width() as usize;
    out.data
        .par_chunks_mut(width * 4)
        .zip(top.as_raw().par_chunks(width))
        .zip(bottom.as_raw().par_chunks(width))
        .for_each(|((dst, t), b)| merge_row(dst, t, b));
    Ok(out)
}

fn prepare_output(top: &GrayMatrix, bottom: &GrayMatrix) -> TankResult<CompositeImage> {
    if top.canvas() != bottom.canvas() {
        return Err(TankError::dimension_mismatch(format!(
            "merge expects equal layers, got top {}x{} and bottom {}x{}",
            top.width(),
            top.height(),
            bottom.width(),
            bottom.height()
        )));
    }
    CompositeImage::transparent(top.width(), top.height())
}

fn merge_row(dst: &mut [u8], top: &[u8], bottom: &[u8]) {
    for ((px, &t), &b) in dst.chunks_exact_mut(4).zip(top).zip(bottom) {
        px.copy_from_slice(&merge_pixel(t, b));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/merge.rs"]
mod tests;
