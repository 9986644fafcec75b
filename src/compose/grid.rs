use crate::{
    devices::catalog::{DisplayShape, Platform},
    foundation::core::TargetDims,
};

/// Inset of the digit grid on round displays.
pub const ROUND_PADDING: u32 = 10;

/// Placement of one digit glyph; pastes are clipped to this box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridCell {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// 2x2 digit layout: hours on the top row, minutes on the bottom row.
///
/// The top row is one pixel shorter than half the grid, leaving a one-pixel gap above the bottom
/// row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompositeGrid {
    pub hour_tens: GridCell,
    pub hour_ones: GridCell,
    pub minute_tens: GridCell,
    pub minute_ones: GridCell,
}

impl CompositeGrid {
    /// Full-bleed grid for rectangular displays.
    pub fn rectangular(canvas: TargetDims) -> Self {
        let col_w = canvas.width / 2;
        let row_h = canvas.height / 2;
        Self::from_origin(
            0,
            0,
            [col_w, canvas.width - col_w],
            [row_h, canvas.height - row_h],
        )
    }

    /// Grid inset by `padding` on every side, as used on round displays.
    pub fn round(canvas: TargetDims, padding: u32) -> Self {
        let inner_w = canvas.width.saturating_sub(padding.saturating_mul(2));
        let inner_h = canvas.height.saturating_sub(padding.saturating_mul(2));
        let col_w = inner_w / 2;
        let row_h = inner_h / 2;
        Self::from_origin(padding, padding, [col_w, col_w], [row_h, row_h])
    }

    pub fn for_platform(platform: Platform) -> Self {
        match platform.shape() {
            DisplayShape::Rect => Self::rectangular(platform.dims()),
            DisplayShape::Round => Self::round(platform.dims(), ROUND_PADDING),
        }
    }

    /// Cells in hour-tens, hour-ones, minute-tens, minute-ones order.
    pub fn cells(&self) -> [GridCell; 4] {
        [
            self.hour_tens,
            self.hour_ones,
            self.minute_tens,
            self.minute_ones,
        ]
    }

    fn from_origin(x0: u32, y0: u32, col_w: [u32; 2], row_h: [u32; 2]) -> Self {
        let top_h = row_h[0].saturating_sub(1);
        let bottom_y = y0 + row_h[0];
        let cell = |x, y, width, height| GridCell {
            x,
            y,
            width,
            height,
        };
        Self {
            hour_tens: cell(x0, y0, col_w[0], top_h),
            hour_ones: cell(x0 + col_w[0], y0, col_w[1], top_h),
            minute_tens: cell(x0, bottom_y, col_w[0], row_h[1]),
            minute_ones: cell(x0 + col_w[0], bottom_y, col_w[1], row_h[1]),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/grid.rs"]
mod tests;
