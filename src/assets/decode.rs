use std::path::{Path, PathBuf};

use anyhow::Context;
use image::DynamicImage;

use crate::foundation::error::WatchshotResult;

/// Decode encoded image bytes, keeping the source pixel format.
pub fn decode_image(bytes: &[u8]) -> WatchshotResult<DynamicImage> {
    let img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(img)
}

/// Read and decode an image file.
pub fn load_image(path: &Path) -> WatchshotResult<DynamicImage> {
    let bytes = std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    let img = image::load_from_memory(&bytes)
        .with_context(|| format!("decode image '{}'", path.display()))?;
    Ok(img)
}

/// Write `img` as PNG, creating the parent directory if needed.
pub fn save_png(path: &Path, img: &DynamicImage) -> WatchshotResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// `*.png` files directly inside `dir`, sorted by file name.
pub fn list_pngs(dir: &Path) -> WatchshotResult<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("read dir '{}'", dir.display()))? {
        let path = entry
            .with_context(|| format!("read dir entry in '{}'", dir.display()))?
            .path();
        let is_png = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("png"));
        if is_png && path.is_file() {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
