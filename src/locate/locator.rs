use std::path::Path;

use anyhow::Context as _;
use image::{DynamicImage, imageops::FilterType};

use crate::{
    foundation::core::{Rect, TargetDims},
    foundation::error::{WatchshotError, WatchshotResult},
    foundation::luma::LumaPlane,
    locate::aspect::fit_aspect,
    locate::center::{CenterSearchOpts, centered_window},
    locate::darkness::{DarknessOpts, find_display_bounds},
};

/// Resampling filter used whenever a crop does not land exactly on the target size.
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// Tunables for [`locate_display`] and [`center_crop`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LocatorOpts {
    pub darkness: DarknessOpts,
    pub search: CenterSearchOpts,
}

impl LocatorOpts {
    /// Load options from a JSON file. Missing fields keep their defaults.
    pub fn from_path(path: &Path) -> WatchshotResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read locator config '{}'", path.display()))?;
        let opts: Self = serde_json::from_str(&text)
            .with_context(|| format!("parse locator config '{}'", path.display()))?;
        opts.validate()?;
        Ok(opts)
    }

    pub fn validate(&self) -> WatchshotResult<()> {
        let d = &self.darkness;
        if !d.dark_threshold.is_finite() || d.dark_threshold < 0.0 {
            return Err(WatchshotError::validation(
                "darkness.dark_threshold must be finite and >= 0",
            ));
        }
        for (name, value) in [
            ("row_fraction", d.row_fraction),
            ("col_fraction", d.col_fraction),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(WatchshotError::validation(format!(
                    "darkness.{name} must be within [0, 1]"
                )));
            }
        }
        if self.search.stride == 0 {
            return Err(WatchshotError::validation("search.stride must be >= 1"));
        }
        Ok(())
    }
}

/// Which pass produced a [`Located`] rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocateMethod {
    Darkness,
    CenterFallback,
}

/// Crop rectangle chosen by [`locate_rect`], before any resampling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Located {
    pub rect: Rect,
    pub method: LocateMethod,
}

/// Find the device display inside a capture.
///
/// The darkness bounding box is aspect-fitted to `target`; when no dark rows or columns exist the
/// centered window is used instead. Only an empty image is an error.
#[tracing::instrument(skip(img, opts), fields(width = img.width(), height = img.height()))]
pub fn locate_rect(
    img: &DynamicImage,
    target: TargetDims,
    opts: &LocatorOpts,
) -> WatchshotResult<Located> {
    ensure_non_empty(img)?;
    let luma = LumaPlane::from_image(img);

    let located = match find_display_bounds(&luma, &opts.darkness) {
        Some(bounds) => {
            let rect = fit_aspect(bounds, target).clamp_to(img.width(), img.height());
            tracing::debug!(?bounds, ?rect, "display located by darkness");
            Located {
                rect,
                method: LocateMethod::Darkness,
            }
        }
        None => {
            tracing::warn!("no dark display region found, falling back to centered crop");
            Located {
                rect: centered_window(&luma, target, &opts.search),
                method: LocateMethod::CenterFallback,
            }
        }
    };
    Ok(located)
}

/// Locate the display and return it at exactly `target` size.
pub fn locate_display(
    img: &DynamicImage,
    target: TargetDims,
    opts: &LocatorOpts,
) -> WatchshotResult<DynamicImage> {
    let located = locate_rect(img, target, opts)?;
    crop_and_fit(img, located.rect, target)
}

/// Centered crop to `target`, searching for the darkest window when the image is too small.
pub fn center_crop(
    img: &DynamicImage,
    target: TargetDims,
    opts: &CenterSearchOpts,
) -> WatchshotResult<DynamicImage> {
    ensure_non_empty(img)?;
    let luma = LumaPlane::from_image(img);
    let rect = centered_window(&luma, target, opts);
    crop_and_fit(img, rect, target)
}

/// Crop `rect` (clamped to the image) and resample to `target` if the sizes differ.
pub fn crop_and_fit(
    img: &DynamicImage,
    rect: Rect,
    target: TargetDims,
) -> WatchshotResult<DynamicImage> {
    ensure_non_empty(img)?;
    let rect = rect.clamp_to(img.width(), img.height());
    let cropped = img.crop_imm(rect.left, rect.top, rect.width(), rect.height());
    if cropped.width() == 0 || cropped.height() == 0 {
        return Err(WatchshotError::resample(format!(
            "crop {rect:?} produced an empty image"
        )));
    }

    if (cropped.width(), cropped.height()) == (target.width, target.height) {
        return Ok(cropped);
    }
    tracing::warn!(
        crop_w = cropped.width(),
        crop_h = cropped.height(),
        %target,
        "crop does not match target, resampling"
    );
    Ok(cropped.resize_exact(target.width, target.height, RESAMPLE_FILTER))
}

fn ensure_non_empty(img: &DynamicImage) -> WatchshotResult<()> {
    if img.width() == 0 || img.height() == 0 {
        return Err(WatchshotError::resample(format!(
            "input image is empty ({}x{})",
            img.width(),
            img.height()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/locate/locator.rs"]
mod tests;
