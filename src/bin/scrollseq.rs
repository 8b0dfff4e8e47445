use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use scrollseq::{
    Anchor, CanvasSurface, DirSource, ExperienceConfig, FrameStore, Preloader, Progress,
    RenderLoop, RenderOutcome, ScrollMapper, load_frame,
};

#[derive(Parser, Debug)]
#[command(name = "scrollseq", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Preload the whole sequence and print a JSON report.
    Preload(PreloadArgs),
    /// Render the frame shown at a scroll offset as a PNG.
    Scrub(ScrubArgs),
}

#[derive(Parser, Debug)]
struct PreloadArgs {
    /// Experience config JSON. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Site root that frame paths resolve against.
    #[arg(long)]
    root: PathBuf,

    /// Print each progress update to stderr.
    #[arg(long, default_value_t = false)]
    progress: bool,
}

#[derive(Parser, Debug)]
struct ScrubArgs {
    /// Experience config JSON. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Site root that frame paths resolve against.
    #[arg(long)]
    root: PathBuf,

    /// Document scroll offset in pixels.
    #[arg(long)]
    scroll: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Preload(args) => cmd_preload(args),
        Command::Scrub(args) => cmd_scrub(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ExperienceConfig> {
    let config = match path {
        Some(p) => ExperienceConfig::from_path(p)?,
        None => ExperienceConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn cmd_preload(args: PreloadArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let source = DirSource::new(&args.root);
    let mut store = FrameStore::new(config.sequence.frame_count);
    let preloader = Preloader::new(config.preload.clone())?;
    let mut sink = |p: Progress| {
        if args.progress {
            eprintln!("loading {} ({}/{})", p.label(), p.loaded, p.total);
        }
    };
    let report = preloader.preload(
        &mut store,
        &config.sequence.paths,
        &source,
        config.canvas,
        &mut sink,
    )?;

    let stdout = std::io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), &report).context("write preload report")?;
    println!();
    Ok(())
}

fn cmd_scrub(args: ScrubArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;

    let page = &config.page;
    let region_start = Anchor::TOP_TOP.resolve(page.animation_section, page.viewport_height);
    let mut mapper = ScrollMapper::new(
        config.sequence.frame_count,
        region_start,
        config.scroll.pin_distance,
        config.scroll.fade_distance,
    )?;
    let target = mapper
        .update(args.scroll.clamp(0.0, page.scroll_limit()))
        .target;

    // Only the frame on screen at this offset is needed.
    let source = DirSource::new(&args.root);
    let path = config.sequence.paths.path(target);
    let mut store = FrameStore::new(config.sequence.frame_count);
    match load_frame(&source, &path, config.canvas, config.preload.quality) {
        Ok(frame) => store.insert(target, frame)?,
        Err(err) => tracing::warn!(frame = target.0, %path, error = %err, "failed to load frame"),
    }

    let mut surface = CanvasSurface::new(config.canvas);
    let mut render = RenderLoop::new();
    match render.tick(target, &store, &mut surface)? {
        RenderOutcome::Painted(i) => eprintln!("frame {i} at scroll {}", args.scroll),
        RenderOutcome::Hole(i) => eprintln!("frame {i} failed to load; writing blank canvas"),
        RenderOutcome::Unchanged | RenderOutcome::Stopped => {}
    }

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    surface
        .to_image()?
        .save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
