use crate::foundation::{core::Rect, luma::LumaPlane};

/// Luminance below which a pixel counts as part of the display.
pub const DEFAULT_DARK_THRESHOLD: f32 = 50.0;
/// Share of the image width a row must be dark over to count as a display row.
pub const DEFAULT_ROW_FRACTION: f64 = 0.3;
/// Share of the image height a column must be dark over to count as a display column.
pub const DEFAULT_COL_FRACTION: f64 = 0.3;

/// Thresholds for the darkness bounding-box pass.
///
/// The defaults were tuned against one emulator's window chrome; other capture sources may need
/// different values.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DarknessOpts {
    pub dark_threshold: f32,
    pub row_fraction: f64,
    pub col_fraction: f64,
}

impl Default for DarknessOpts {
    fn default() -> Self {
        Self {
            dark_threshold: DEFAULT_DARK_THRESHOLD,
            row_fraction: DEFAULT_ROW_FRACTION,
            col_fraction: DEFAULT_COL_FRACTION,
        }
    }
}

/// Bounding box of all rows and columns that are mostly dark.
///
/// Returns `None` when no row or no column passes its threshold.
pub fn find_display_bounds(luma: &LumaPlane, opts: &DarknessOpts) -> Option<Rect> {
    if luma.is_empty() {
        return None;
    }

    let mut row_dark = vec![0u32; luma.height as usize];
    let mut col_dark = vec![0u32; luma.width as usize];
    for y in 0..luma.height {
        for (x, &v) in luma.row(y).iter().enumerate() {
            if v < opts.dark_threshold {
                row_dark[y as usize] += 1;
                col_dark[x] += 1;
            }
        }
    }

    let row_min = f64::from(luma.width) * opts.row_fraction;
    let col_min = f64::from(luma.height) * opts.col_fraction;
    let (top, bottom) = first_last_above(&row_dark, row_min)?;
    let (left, right) = first_last_above(&col_dark, col_min)?;

    Some(Rect {
        left,
        top,
        right: right + 1,
        bottom: bottom + 1,
    })
}

fn first_last_above(counts: &[u32], min: f64) -> Option<(u32, u32)> {
    let hit = |c: &u32| f64::from(*c) > min;
    let first = counts.iter().position(hit)?;
    let last = counts.iter().rposition(hit)?;
    Some((first as u32, last as u32))
}

#[cfg(test)]
#[path = "../../tests/unit/locate/darkness.rs"]
mod tests;
