use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use image::{DynamicImage, RgbImage};
use rayon::prelude::*;

use crate::{
    assets::decode::{load_image, save_png},
    assets::glyphs::GlyphSet,
    compose::clock::compose_for_platform,
    devices::catalog::Platform,
    foundation::core::TargetDims,
    foundation::error::{WatchshotError, WatchshotResult},
    locate::locator::{LocateMethod, LocatorOpts, center_crop, crop_and_fit, locate_rect},
    pipeline::plan::ShotPlan,
};

/// Worker settings shared by the batch entry points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchOpts {
    /// Override rayon worker threads. `None` uses rayon's default.
    pub threads: Option<usize>,
}

/// A composited screenshot for one (platform, time) pair.
///
/// Platforms that share a display reuse the same pixels.
#[derive(Clone, Debug)]
pub struct RenderedShot {
    pub platform: Platform,
    pub name: String,
    pub image: Arc<RgbImage>,
}

impl RenderedShot {
    /// `<out_dir>/<platform>/<name>.png`
    pub fn output_path(&self, out_dir: &Path) -> PathBuf {
        out_dir
            .join(self.platform.name())
            .join(format!("{}.png", self.name))
    }
}

/// Composite every shot of `plan` for every platform of `plan`.
///
/// Results come back platform-major in plan order. Each distinct display is composed once per
/// shot; the first failing shot aborts the batch.
#[tracing::instrument(skip(plan, glyphs), fields(shots = plan.shots.len(), platforms = plan.platforms.len()))]
pub fn compose_batch(
    plan: &ShotPlan,
    glyphs: &GlyphSet,
    opts: BatchOpts,
) -> WatchshotResult<Vec<RenderedShot>> {
    plan.validate()?;

    let mut times = Vec::with_capacity(plan.shots.len());
    for shot in &plan.shots {
        times.push((shot.clock_time()?, shot.output_stem()?));
    }

    // Platforms sharing a display point at the same entry of `displays`.
    let mut displays: Vec<Platform> = Vec::new();
    let display_idx: Vec<usize> = plan
        .platforms
        .iter()
        .map(|p| match displays.iter().position(|q| q.shares_display_with(*p)) {
            Some(i) => i,
            None => {
                displays.push(*p);
                displays.len() - 1
            }
        })
        .collect();

    // Job `shot_idx * displays.len() + display` renders that shot on that display.
    let jobs: Vec<(usize, Platform)> = (0..times.len())
        .flat_map(|shot_idx| displays.iter().map(move |d| (shot_idx, *d)))
        .collect();

    let pool = build_thread_pool(opts.threads)?;
    let rendered: Vec<Arc<RgbImage>> = pool.install(|| {
        jobs.par_iter()
            .map(|&(shot_idx, platform)| {
                Arc::new(compose_for_platform(times[shot_idx].0, glyphs, platform))
            })
            .collect()
    });
    tracing::info!(
        unique = rendered.len(),
        outputs = times.len() * plan.platforms.len(),
        "composited shots"
    );

    let mut out = Vec::with_capacity(times.len() * plan.platforms.len());
    for (platform, &d) in plan.platforms.iter().zip(&display_idx) {
        for (shot_idx, (_, name)) in times.iter().enumerate() {
            out.push(RenderedShot {
                platform: *platform,
                name: name.clone(),
                image: Arc::clone(&rendered[shot_idx * displays.len() + d]),
            });
        }
    }
    Ok(out)
}

/// Encode `shots` as PNG under `out_dir`, returning the written paths in input order.
pub fn write_shots(
    shots: &[RenderedShot],
    out_dir: &Path,
    opts: BatchOpts,
) -> WatchshotResult<Vec<PathBuf>> {
    let pool = build_thread_pool(opts.threads)?;
    pool.install(|| {
        shots
            .par_iter()
            .map(|shot| -> WatchshotResult<PathBuf> {
                let path = shot.output_path(out_dir);
                save_png(&path, &DynamicImage::ImageRgb8((*shot.image).clone()))?;
                Ok(path)
            })
            .collect()
    })
}

/// How a capture is cut down to the display size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropMode {
    /// Darkness bounding box with centered-crop fallback.
    #[default]
    Locate,
    /// Plain centered crop.
    Center,
}

/// One capture to normalize: read `input`, write `output` (may be the same path).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CropJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// What happened to one [`CropJob`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CropReport {
    pub output: PathBuf,
    /// `None` in [`CropMode::Center`].
    pub method: Option<LocateMethod>,
}

/// Normalize captures in parallel.
///
/// Every job runs to completion; failures are returned per job so one unreadable file does not
/// stop the rest.
#[tracing::instrument(skip(jobs, target, opts), fields(jobs = jobs.len(), %target))]
pub fn crop_batch(
    jobs: &[CropJob],
    target: TargetDims,
    mode: CropMode,
    opts: &LocatorOpts,
    batch: BatchOpts,
) -> WatchshotResult<Vec<WatchshotResult<CropReport>>> {
    opts.validate()?;
    let pool = build_thread_pool(batch.threads)?;
    let reports: Vec<WatchshotResult<CropReport>> = pool.install(|| {
        jobs.par_iter()
            .map(|job| crop_one(job, target, mode, opts))
            .collect()
    });

    let failed = reports.iter().filter(|r| r.is_err()).count();
    tracing::info!(ok = reports.len() - failed, failed, "crop batch finished");
    Ok(reports)
}

fn crop_one(
    job: &CropJob,
    target: TargetDims,
    mode: CropMode,
    opts: &LocatorOpts,
) -> WatchshotResult<CropReport> {
    let img = load_image(&job.input)?;
    let (out, method) = match mode {
        CropMode::Locate => {
            let located = locate_rect(&img, target, opts)?;
            (crop_and_fit(&img, located.rect, target)?, Some(located.method))
        }
        CropMode::Center => (center_crop(&img, target, &opts.search)?, None),
    };
    save_png(&job.output, &out)?;
    tracing::debug!(input = %job.input.display(), output = %job.output.display(), ?method, "cropped");
    Ok(CropReport {
        output: job.output.clone(),
        method,
    })
}

fn build_thread_pool(threads: Option<usize>) -> WatchshotResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(WatchshotError::validation(
            "batch 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| WatchshotError::validation(format!("failed to build rayon pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/batch.rs"]
mod tests;
