use image::{Rgb, RgbImage, imageops};

use crate::{
    assets::glyphs::GlyphSet,
    compose::grid::{CompositeGrid, GridCell},
    compose::time::ClockTime,
    devices::catalog::Platform,
    foundation::core::TargetDims,
};

/// Canvas fill behind the digits.
pub const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);

/// Render `time` from digit glyphs onto a fresh `canvas`-sized image.
///
/// Output depends only on the arguments. In 12-hour mode a zero hour-tens digit is left blank;
/// 24-hour mode always draws it.
#[tracing::instrument(skip(time, glyphs, grid), fields(%time))]
pub fn compose_clock(
    time: ClockTime,
    glyphs: &GlyphSet,
    canvas: TargetDims,
    grid: &CompositeGrid,
) -> RgbImage {
    let mut out = RgbImage::from_pixel(canvas.width, canvas.height, BACKGROUND);
    let d = time.digits();

    paste_clipped(&mut out, glyphs.glyph(d.minute_tens), grid.minute_tens);
    paste_clipped(&mut out, glyphs.glyph(d.minute_ones), grid.minute_ones);
    paste_clipped(&mut out, glyphs.glyph(d.hour_ones), grid.hour_ones);
    if time.shows_hour_tens() {
        paste_clipped(&mut out, glyphs.glyph(d.hour_tens), grid.hour_tens);
    }
    out
}

/// [`compose_clock`] with the platform's display size and grid.
pub fn compose_for_platform(time: ClockTime, glyphs: &GlyphSet, platform: Platform) -> RgbImage {
    compose_clock(
        time,
        glyphs,
        platform.dims(),
        &CompositeGrid::for_platform(platform),
    )
}

fn paste_clipped(canvas: &mut RgbImage, glyph: &RgbImage, cell: GridCell) {
    let w = glyph
        .width()
        .min(cell.width)
        .min(canvas.width().saturating_sub(cell.x));
    let h = glyph
        .height()
        .min(cell.height)
        .min(canvas.height().saturating_sub(cell.y));
    if w == 0 || h == 0 {
        return;
    }
    let part = imageops::crop_imm(glyph, 0, 0, w, h).to_image();
    imageops::replace(canvas, &part, i64::from(cell.x), i64::from(cell.y));
}

#[cfg(test)]
#[path = "../../tests/unit/compose/clock.rs"]
mod tests;
