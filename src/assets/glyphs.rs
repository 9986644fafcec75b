use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbImage};

use crate::{
    assets::decode::load_image,
    foundation::error::{WatchshotError, WatchshotResult},
};

/// One RGB8 bitmap per decimal digit, all the same size.
///
/// A `GlyphSet` always holds all ten digits; construction fails otherwise. It is immutable and
/// shared by reference across compositions.
#[derive(Clone, Debug)]
pub struct GlyphSet {
    glyphs: [RgbImage; 10],
}

impl GlyphSet {
    /// File name of the glyph for `digit` inside a glyph directory.
    pub fn file_name(digit: u8) -> String {
        format!("digit_{digit}.png")
    }

    pub fn from_images(images: [DynamicImage; 10]) -> WatchshotResult<Self> {
        let glyphs = images.map(|img| img.to_rgb8());
        let (w, h) = glyphs[0].dimensions();
        if w == 0 || h == 0 {
            return Err(WatchshotError::glyph("glyph for digit 0 is empty"));
        }
        for (digit, g) in glyphs.iter().enumerate() {
            if g.dimensions() != (w, h) {
                return Err(WatchshotError::glyph(format!(
                    "glyph for digit {digit} is {}x{}, expected {w}x{h}",
                    g.width(),
                    g.height()
                )));
            }
        }
        Ok(Self { glyphs })
    }

    /// Load `digit_0.png` ..= `digit_9.png` from `dir`.
    ///
    /// Every missing file is reported in one error before anything is decoded.
    #[tracing::instrument]
    pub fn load_dir(dir: &Path) -> WatchshotResult<Self> {
        let paths: Vec<PathBuf> = (0..10u8).map(|d| dir.join(Self::file_name(d))).collect();
        let missing: Vec<String> = paths
            .iter()
            .filter(|p| !p.is_file())
            .map(|p| p.display().to_string())
            .collect();
        if !missing.is_empty() {
            return Err(WatchshotError::glyph(format!(
                "missing glyph files: {}",
                missing.join(", ")
            )));
        }

        let images = paths
            .iter()
            .map(|p| load_image(p))
            .collect::<WatchshotResult<Vec<_>>>()?;
        let images: [DynamicImage; 10] = images
            .try_into()
            .map_err(|_| WatchshotError::glyph("expected exactly ten glyph images"))?;
        let set = Self::from_images(images)?;
        tracing::debug!(dims = ?set.glyph_dims(), "glyph set loaded");
        Ok(set)
    }

    /// Bitmap for `digit`, which must be in `0..=9`.
    pub fn glyph(&self, digit: u8) -> &RgbImage {
        &self.glyphs[usize::from(digit)]
    }

    pub fn glyph_dims(&self) -> (u32, u32) {
        self.glyphs[0].dimensions()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/glyphs.rs"]
mod tests;
