//! Command-line player: sorts a shuffled sample and writes the animation
//! as SVG.
//!
//! ```bash
//! bubbleviz --length 12 --seed 7
//! bubbleviz --options assets/presets/brisk.toml --frames-dir frames
//! RUST_LOG=debug bubbleviz --length 5 --realtime
//! ```

use std::path::{Path, PathBuf};

use bubbleviz::error::BubbleVizError;
use bubbleviz::options::Options;
use bubbleviz::playback::{Pacing, Playback};
use bubbleviz::render::svg::SvgCanvas;
use bubbleviz::sampler::shuffled_sample;
use clap::Parser;

#[derive(Parser)]
#[command(name = "bubbleviz")]
#[command(about = "Animate bubble sort over a shuffled sample, rendered to SVG")]
#[command(version)]
struct Cli {
    /// TOML options file (partial files fall back to defaults)
    #[arg(long)]
    options: Option<PathBuf>,

    /// Number of values to sort
    #[arg(short, long)]
    length: Option<i64>,

    /// Shuffle seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Swap slide duration in milliseconds
    #[arg(long)]
    swap_ms: Option<u64>,

    /// Comparison pause in milliseconds
    #[arg(long)]
    compare_ms: Option<u64>,

    /// Play at wall-clock speed instead of as fast as possible
    #[arg(long)]
    realtime: bool,

    /// Write every presented frame into this directory
    #[arg(long)]
    frames_dir: Option<PathBuf>,

    /// Where to write the final frame
    #[arg(short, long, default_value = "bubble_sort.svg")]
    output: PathBuf,

    /// List the presets in a directory and exit
    #[arg(long, value_name = "DIR")]
    list_presets: Option<PathBuf>,
}

impl Cli {
    /// Options file (or defaults) with command-line overrides applied.
    fn resolve_options(&self) -> Result<Options, BubbleVizError> {
        let mut options = match &self.options {
            Some(path) => Options::load(path)?,
            None => Options::default(),
        };
        if let Some(length) = self.length {
            options.sample.length = length;
        }
        if self.seed.is_some() {
            options.sample.seed = self.seed;
        }
        if let Some(ms) = self.swap_ms {
            options.timing.swap_duration_ms = ms;
        }
        if let Some(ms) = self.compare_ms {
            options.timing.compare_duration_ms = ms;
        }
        Ok(options)
    }
}

fn write_frames(dir: &Path, frames: &[String]) -> Result<(), BubbleVizError> {
    std::fs::create_dir_all(dir)?;
    for (index, frame) in frames.iter().enumerate() {
        std::fs::write(dir.join(format!("frame_{index:05}.svg")), frame)?;
    }
    log::info!("wrote {} frames to {}", frames.len(), dir.display());
    Ok(())
}

fn run(cli: &Cli) -> Result<(), BubbleVizError> {
    if let Some(dir) = &cli.list_presets {
        for name in Options::list_presets(dir) {
            println!("{name}");
        }
        return Ok(());
    }

    let options = cli.resolve_options()?;
    let (values, range) =
        shuffled_sample(options.sample.length, options.sample.seed);

    let mut canvas = SvgCanvas::new(
        options.canvas.width,
        options.canvas.height,
        &options.theme.background_color,
    );
    if cli.frames_dir.is_some() {
        canvas = canvas.recording();
    }

    let pacing = if cli.realtime {
        Pacing::Realtime
    } else {
        Pacing::Immediate
    };
    let mut playback = Playback::new(canvas, &options, pacing);
    let summary = playback.play(&values, range);
    log::info!(
        "{} comparisons, {} swaps, {:?} of animation",
        summary.stats.comparisons,
        summary.stats.swaps,
        summary.duration
    );
    if let Some(fps) = summary.measured_fps {
        log::info!("slide frame rate: {fps:.1} fps");
    }

    let mut canvas = playback.into_canvas();
    if let Some(dir) = &cli.frames_dir {
        write_frames(dir, &canvas.take_frames())?;
    }

    let document = canvas
        .last_frame()
        .map_or_else(|| canvas.document(), str::to_owned);
    std::fs::write(&cli.output, document)?;
    log::info!("final frame written to {}", cli.output.display());
    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
