use crate::foundation::error::{WatchshotError, WatchshotResult};

/// Pixel rectangle with exclusive `right` / `bottom` edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    pub left: u32,
    pub top: u32,
    pub right: u32, // exclusive
    pub bottom: u32, // exclusive
}

impl Rect {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> WatchshotResult<Self> {
        if right <= left || bottom <= top {
            return Err(WatchshotError::validation(format!(
                "rect ({left}, {top}, {right}, {bottom}) must have right > left and bottom > top"
            )));
        }
        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    pub fn from_origin_size(left: u32, top: u32, width: u32, height: u32) -> WatchshotResult<Self> {
        Self::new(
            left,
            top,
            left.saturating_add(width),
            top.saturating_add(height),
        )
    }

    pub fn width(self) -> u32 {
        self.right - self.left
    }

    pub fn height(self) -> u32 {
        self.bottom - self.top
    }

    pub fn dims(self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Intersect with `[0, width) x [0, height)`, keeping at least one pixel per axis.
    pub fn clamp_to(self, width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let left = self.left.min(width - 1);
        let top = self.top.min(height - 1);
        Self {
            left,
            top,
            right: self.right.clamp(left + 1, width),
            bottom: self.bottom.clamp(top + 1, height),
        }
    }

    pub fn contains_rect(self, other: Rect) -> bool {
        self.left <= other.left
            && self.top <= other.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }
}

/// Known display size of a device variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct TargetDims {
    pub width: u32,
    pub height: u32,
}

impl TargetDims {
    pub fn new(width: u32, height: u32) -> WatchshotResult<Self> {
        if width == 0 || height == 0 {
            return Err(WatchshotError::validation(
                "target width/height must be > 0",
            ));
        }
        Ok(Self { width, height })
    }

    pub fn aspect(self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// True if an image of `width` x `height` covers this target on both axes.
    pub fn fits_within(self, width: u32, height: u32) -> bool {
        self.width <= width && self.height <= height
    }
}

impl std::fmt::Display for TargetDims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
