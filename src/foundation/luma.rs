use image::DynamicImage;

use crate::foundation::core::Rect;

/// Single-channel luminance plane, one `f32` per pixel in `0.0..=255.0`.
///
/// Each value is the plain mean of the color channels. Alpha does not contribute, so an RGBA
/// capture and its RGB flattening classify identically.
#[derive(Clone, Debug)]
pub struct LumaPlane {
    pub width: u32,
    pub height: u32,
    data: Vec<f32>,
}

impl LumaPlane {
    pub fn from_image(img: &DynamicImage) -> Self {
        let (width, height) = (img.width(), img.height());
        let color = img.color();
        let data = if color.has_color() {
            img.to_rgb8()
                .pixels()
                .map(|p| (f32::from(p[0]) + f32::from(p[1]) + f32::from(p[2])) / 3.0)
                .collect()
        } else {
            img.to_luma8().pixels().map(|p| f32::from(p[0])).collect()
        };
        Self {
            width,
            height,
            data,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    pub fn row(&self, y: u32) -> &[f32] {
        let w = self.width as usize;
        let start = (y as usize) * w;
        &self.data[start..start + w]
    }

    /// Mean luminance inside `rect`; the rect must lie within the plane.
    pub fn mean_in(&self, rect: Rect) -> f64 {
        let mut sum = 0.0f64;
        for y in rect.top..rect.bottom {
            let row = self.row(y);
            sum += row[rect.left as usize..rect.right as usize]
                .iter()
                .map(|&v| f64::from(v))
                .sum::<f64>();
        }
        let n = u64::from(rect.width()) * u64::from(rect.height());
        sum / (n as f64)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/luma.rs"]
mod tests;
