use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser, Debug)]
#[command(name = "watchshot", version)]
struct Cli {
    /// Log debug output from watchshot.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crop emulator captures down to the watch display.
    Crop(CropArgs),
    /// Composite clock screenshots from digit glyphs.
    Compose(ComposeArgs),
    /// List known platforms and their display sizes.
    Devices,
}

#[derive(Parser, Debug)]
struct CropArgs {
    /// Input PNG, or a directory whose PNGs are all processed.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output file (single input) or directory (directory input). Defaults to in-place.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Take the target size from this platform.
    #[arg(long, conflicts_with_all = ["width", "height"])]
    platform: Option<watchshot::Platform>,

    /// Target width in pixels (with --height).
    #[arg(long, requires = "height")]
    width: Option<u32>,

    /// Target height in pixels (with --width).
    #[arg(long, requires = "width")]
    height: Option<u32>,

    /// Display search strategy.
    #[arg(long, value_enum, default_value_t = ModeChoice::Locate)]
    mode: ModeChoice,

    /// Locator options JSON; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Luminance (0-255) below which a pixel counts as dark.
    #[arg(long)]
    dark_threshold: Option<f32>,

    /// Share of the width a row must be dark over.
    #[arg(long)]
    row_fraction: Option<f64>,

    /// Share of the height a column must be dark over.
    #[arg(long)]
    col_fraction: Option<f64>,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Directory holding digit_0.png .. digit_9.png.
    #[arg(long)]
    glyphs: PathBuf,

    /// Output root; files land in <out-dir>/<platform>/<name>.png.
    #[arg(long)]
    out_dir: PathBuf,

    /// Shot plan JSON. Defaults to the store screenshot set on all platforms.
    #[arg(long)]
    plan: Option<PathBuf>,

    /// Restrict to these platforms (repeatable).
    #[arg(long = "platform")]
    platforms: Vec<watchshot::Platform>,

    /// Render these times instead of the plan's, as HH:MM[/12h|/24h] (repeatable).
    #[arg(long = "time")]
    times: Vec<watchshot::ClockTime>,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Locate,
    Center,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Crop(args) => cmd_crop(args),
        Command::Compose(args) => cmd_compose(args),
        Command::Devices => cmd_devices(),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("watchshot=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn cmd_crop(args: CropArgs) -> anyhow::Result<()> {
    let target = match (args.platform, args.width, args.height) {
        (Some(p), _, _) => p.dims(),
        (None, Some(w), Some(h)) => watchshot::TargetDims::new(w, h)?,
        _ => anyhow::bail!("pass either --platform or both --width and --height"),
    };

    let mut opts = match &args.config {
        Some(path) => watchshot::LocatorOpts::from_path(path)?,
        None => watchshot::LocatorOpts::default(),
    };
    if let Some(t) = args.dark_threshold {
        opts.darkness.dark_threshold = t;
    }
    if let Some(f) = args.row_fraction {
        opts.darkness.row_fraction = f;
    }
    if let Some(f) = args.col_fraction {
        opts.darkness.col_fraction = f;
    }
    opts.validate()?;

    let jobs = crop_jobs(&args.in_path, args.out.as_deref())?;
    if jobs.is_empty() {
        anyhow::bail!("no PNG files found in '{}'", args.in_path.display());
    }
    eprintln!("cropping {} file(s) to {target}", jobs.len());

    let mode = match args.mode {
        ModeChoice::Locate => watchshot::CropMode::Locate,
        ModeChoice::Center => watchshot::CropMode::Center,
    };
    let reports = watchshot::crop_batch(
        &jobs,
        target,
        mode,
        &opts,
        watchshot::BatchOpts {
            threads: args.threads,
        },
    )?;

    let mut failed = 0usize;
    for (job, report) in jobs.iter().zip(&reports) {
        match report {
            Ok(r) => match r.method {
                Some(watchshot::LocateMethod::CenterFallback) => {
                    eprintln!("wrote {} (centered fallback)", r.output.display())
                }
                _ => eprintln!("wrote {}", r.output.display()),
            },
            Err(e) => {
                failed += 1;
                eprintln!("failed {}: {e:#}", job.input.display());
            }
        }
    }
    if failed > 0 {
        anyhow::bail!("{failed}/{} file(s) failed", jobs.len());
    }
    Ok(())
}

fn crop_jobs(in_path: &Path, out: Option<&Path>) -> anyhow::Result<Vec<watchshot::CropJob>> {
    if in_path.is_dir() {
        let inputs = watchshot::list_pngs(in_path)?;
        let mut jobs = Vec::with_capacity(inputs.len());
        for input in inputs {
            let output = match (out, input.file_name()) {
                (Some(dir), Some(name)) => dir.join(name),
                _ => input.clone(),
            };
            jobs.push(watchshot::CropJob { input, output });
        }
        return Ok(jobs);
    }

    if !in_path.is_file() {
        anyhow::bail!("'{}' is neither a file nor a directory", in_path.display());
    }
    Ok(vec![watchshot::CropJob {
        input: in_path.to_path_buf(),
        output: out.unwrap_or(in_path).to_path_buf(),
    }])
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let mut plan = match &args.plan {
        Some(path) => watchshot::ShotPlan::from_path(path)?,
        None => watchshot::ShotPlan::default(),
    };
    if !args.platforms.is_empty() {
        let mut seen = HashSet::new();
        plan.platforms = args.platforms.clone();
        plan.platforms.retain(|p| seen.insert(*p));
    }
    if !args.times.is_empty() {
        plan.shots = args
            .times
            .iter()
            .copied()
            .map(watchshot::ShotSpec::from_time)
            .collect();
    }
    plan.validate()?;

    let glyphs = watchshot::GlyphSet::load_dir(&args.glyphs)
        .with_context(|| format!("load glyphs from '{}'", args.glyphs.display()))?;

    let batch = watchshot::BatchOpts {
        threads: args.threads,
    };
    let shots = watchshot::compose_batch(&plan, &glyphs, batch)?;
    let written = watchshot::write_shots(&shots, &args.out_dir, batch)?;
    for path in &written {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_devices() -> anyhow::Result<()> {
    println!("{:<10} {:<20} {:>9}  shape", "platform", "model", "display");
    for p in watchshot::Platform::ALL {
        let shape = match p.shape() {
            watchshot::DisplayShape::Rect => "rect",
            watchshot::DisplayShape::Round => "round",
        };
        println!(
            "{:<10} {:<20} {:>9}  {shape}",
            p.name(),
            p.model(),
            p.dims().to_string()
        );
    }
    Ok(())
}
