use crate::foundation::core::{Rect, TargetDims};

/// Trim `rect` symmetrically until its aspect ratio matches `target`.
///
/// A rect wider than the target loses columns from both sides, a taller one loses rows from top
/// and bottom. The shrink per side is `(excess / 2)` in integer pixels, so an odd excess leaves the
/// result one pixel larger than the ideal size. Each axis keeps at least one pixel.
pub fn fit_aspect(rect: Rect, target: TargetDims) -> Rect {
    let (w, h) = (u64::from(rect.width()), u64::from(rect.height()));
    let (tw, th) = (u64::from(target.width), u64::from(target.height));

    let mut out = rect;
    if w * th > tw * h {
        let new_w = h * tw / th;
        let shrink = shrink_per_side(w, new_w);
        out.left += shrink;
        out.right -= shrink;
    } else {
        let new_h = w * th / tw;
        let shrink = shrink_per_side(h, new_h);
        out.top += shrink;
        out.bottom -= shrink;
    }
    out
}

fn shrink_per_side(current: u64, wanted: u64) -> u32 {
    let shrink = current.saturating_sub(wanted) / 2;
    let max_shrink = current.saturating_sub(1) / 2;
    u32::try_from(shrink.min(max_shrink)).unwrap_or(0)
}

#[cfg(test)]
#[path = "../../tests/unit/locate/aspect.rs"]
mod tests;
