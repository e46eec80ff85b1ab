use std::path::{Path, PathBuf};

use image::ImageEncoder as _;

use crate::foundation::{
    core::CompositeImage,
    error::{TankError, TankResult},
};

/// Encode `img` as an 8-bit straight-alpha RGBA PNG.
pub fn encode_png(img: &CompositeImage) -> TankResult<Vec<u8>> {
    let expected = (img.width as usize)
        .checked_mul(img.height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| TankError::encode("png buffer size overflow"))?;
    if img.data.len() != expected {
        return Err(TankError::encode(format!(
            "composite has {} bytes, expected {expected} for {}x{}",
            img.data.len(),
            img.width,
            img.height
        )));
    }

    let mut out = Vec::new();
    image::codecs::png::PngEncoder::new(&mut out)
        .write_image(
            &img.data,
            img.width,
            img.height,
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|e| TankError::encode(format!("png: {e}")))?;
    Ok(out)
}

/// Encode `img` and write it to `path`.
///
/// Bytes go to a sibling temp file that is renamed over `path` once complete, so a
/// failed write never leaves a truncated PNG behind.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn write_png(img: &CompositeImage, path: &Path) -> TankResult<()> {
    let bytes = encode_png(img)?;
    ensure_parent_dir(path)?;

    let tmp = temp_path_for(path)?;
    let mut guard = TempFileGuard(Some(tmp.clone()));
    std::fs::write(&tmp, &bytes)
        .map_err(|e| TankError::io(format!("write '{}': {e}", tmp.display())))?;
    std::fs::rename(&tmp, path).map_err(|e| {
        TankError::io(format!(
            "rename '{}' -> '{}': {e}",
            tmp.display(),
            path.display()
        ))
    })?;
    guard.0 = None;

    tracing::debug!(bytes = bytes.len(), "wrote png");
    Ok(())
}

/// Create the parent directory of `path` if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> TankResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            TankError::io(format!(
                "failed to create output directory '{}': {e}",
                parent.display()
            ))
        })?;
    }
    Ok(())
}

fn temp_path_for(path: &Path) -> TankResult<PathBuf> {
    let name = path
        .file_name()
        .ok_or_else(|| TankError::io(format!("'{}' has no file name", path.display())))?;
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(name);
    tmp_name.push(format!(".{}.tmp", std::process::id()));
    Ok(path.with_file_name(tmp_name))
}

struct TempFileGuard(Option<PathBuf>);

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        if let Some(path) = self.0.take() {
            let _ = std::fs::remove_file(path);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
