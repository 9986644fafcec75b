use crate::foundation::{
    core::{Rect, TargetDims},
    luma::LumaPlane,
};

/// How far (in pixels) from the naive center the darkest-window search may move.
pub const DEFAULT_SEARCH_RADIUS: u32 = 50;
/// Step between candidate offsets of the darkest-window search.
pub const DEFAULT_SEARCH_STRIDE: u32 = 5;

/// Neighborhood scanned when the image does not cover the target on some axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CenterSearchOpts {
    pub radius: u32,
    pub stride: u32,
}

impl Default for CenterSearchOpts {
    fn default() -> Self {
        Self {
            radius: DEFAULT_SEARCH_RADIUS,
            stride: DEFAULT_SEARCH_STRIDE,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct AxisWindow {
    naive: u32,
    extent: u32,
    /// Largest valid offset; `None` when the image is smaller than the target on this axis.
    max_offset: Option<u32>,
}

impl AxisWindow {
    fn new(image_len: u32, target_len: u32) -> Self {
        if image_len >= target_len {
            let slack = image_len - target_len;
            Self {
                naive: slack / 2,
                extent: target_len,
                max_offset: Some(slack),
            }
        } else {
            Self {
                naive: 0,
                extent: image_len.max(1),
                max_offset: None,
            }
        }
    }

    fn candidates(self, opts: &CenterSearchOpts) -> Vec<u32> {
        match self.max_offset {
            Some(max) => {
                let lo = self.naive.saturating_sub(opts.radius);
                let hi = max.min(self.naive.saturating_add(opts.radius));
                (lo..hi).step_by(opts.stride.max(1) as usize).collect()
            }
            None => vec![0],
        }
    }
}

/// Centered window of `target` size, clipped to the image.
///
/// When the image is at least the target on both axes this is the plain centered crop. Otherwise
/// the short axis is taken whole and the remaining axis is searched around its center for the
/// window with the lowest mean luminance. The naive center starts as the incumbent and is only
/// replaced by a strictly darker candidate.
pub fn centered_window(luma: &LumaPlane, target: TargetDims, opts: &CenterSearchOpts) -> Rect {
    debug_assert!(!luma.is_empty(), "centered_window needs a non-empty plane");

    let xs = AxisWindow::new(luma.width, target.width);
    let ys = AxisWindow::new(luma.height, target.height);
    let window = |x: u32, y: u32| Rect {
        left: x,
        top: y,
        right: x + xs.extent,
        bottom: y + ys.extent,
    };

    let naive = window(xs.naive, ys.naive);
    if xs.max_offset.is_some() && ys.max_offset.is_some() {
        return naive;
    }

    let mut best = naive;
    let mut best_score = luma.mean_in(naive);
    for x in xs.candidates(opts) {
        for y in ys.candidates(opts) {
            let cand = window(x, y);
            let score = luma.mean_in(cand);
            if score < best_score {
                best = cand;
                best_score = score;
            }
        }
    }
    tracing::debug!(?best, best_score, "darkest centered window");
    best
}

#[cfg(test)]
#[path = "../../tests/unit/locate/center.rs"]
mod tests;
