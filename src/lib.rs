//! watchshot produces app-store screenshots for a watch face across its device variants.
//!
//! Two independent paths produce interchangeable PNGs:
//!
//! 1. **Locate**: `capture -> locate_display -> TargetDims-sized image`. The display is found as the
//!    bounding box of mostly-dark rows and columns, trimmed to the target aspect ratio, and falls
//!    back to a centered crop when nothing dark is found.
//! 2. **Compose**: `ClockTime + GlyphSet -> compose_clock -> image`. Four digit glyphs are pasted
//!    into a fixed 2x2 grid, no emulator involved.
//!
//! Both are pure functions over owned images; batch helpers in [`pipeline`] fan work out over a
//! rayon pool.
#![forbid(unsafe_code)]

mod assets;
mod compose;
mod devices;
mod foundation;
mod locate;

/// Batch planning and parallel execution.
pub mod pipeline;

pub use assets::decode::{decode_image, list_pngs, load_image, save_png};
pub use assets::glyphs::GlyphSet;
pub use compose::clock::{BACKGROUND, compose_clock, compose_for_platform};
pub use compose::grid::{CompositeGrid, GridCell, ROUND_PADDING};
pub use compose::time::{ClockDigits, ClockTime};
pub use devices::catalog::{DisplayShape, Platform};
pub use foundation::core::{Rect, TargetDims};
pub use foundation::error::{WatchshotError, WatchshotResult};
pub use foundation::luma::LumaPlane;
pub use locate::aspect::fit_aspect;
pub use locate::center::{
    CenterSearchOpts, DEFAULT_SEARCH_RADIUS, DEFAULT_SEARCH_STRIDE, centered_window,
};
pub use locate::darkness::{
    DEFAULT_COL_FRACTION, DEFAULT_DARK_THRESHOLD, DEFAULT_ROW_FRACTION, DarknessOpts,
    find_display_bounds,
};
pub use locate::locator::{
    LocateMethod, Located, LocatorOpts, RESAMPLE_FILTER, center_crop, crop_and_fit,
    locate_display, locate_rect,
};
pub use pipeline::batch::{
    BatchOpts, CropJob, CropMode, CropReport, RenderedShot, compose_batch, crop_batch,
    write_shots,
};
pub use pipeline::plan::{ShotPlan, ShotSpec};
