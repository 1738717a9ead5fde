//! Parabola - plot quadratic functions in the terminal.

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use parabola::app::App;
use parabola::input::{LineSource, RawTerminalLines, ReaderLines};
use parabola::quadratic::DEFAULT_SAMPLES;
use parabola::render::{Renderer, TerminalRenderer, TextRenderer};
use parabola::theme::{Theme, ThemeColors};
use parabola::PlotError;

#[derive(Parser, Debug)]
#[command(name = "parabola")]
#[command(about = "Plot quadratic functions y = ax² + bx + c in the terminal", long_about = None)]
struct Args {
    /// Number of samples per curve (at least 2)
    #[arg(long, default_value_t = DEFAULT_SAMPLES, value_parser = parse_samples)]
    samples: usize,

    /// Print charts as text instead of opening the full-screen viewer
    #[arg(long)]
    headless: bool,

    /// Chart color theme
    #[arg(long, value_enum, default_value_t = Theme::Dark)]
    theme: Theme,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn parse_samples(s: &str) -> std::result::Result<usize, String> {
    let n: usize = s.parse().map_err(|e| format!("{}", e))?;
    if n < 2 {
        return Err(PlotError::InvalidSampleCount(n).to_string());
    }
    Ok(n)
}

fn init_logging(path: &Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        init_logging(log_path)?;
        tracing::info!(samples = args.samples, theme = args.theme.name(), "Starting parabola");
    }

    let colors = ThemeColors::from_theme(args.theme);

    let lines: Box<dyn LineSource> = if io::stdin().is_terminal() {
        Box::new(RawTerminalLines::new())
    } else {
        Box::new(ReaderLines::new(io::stdin().lock()))
    };

    let renderer: Box<dyn Renderer> = if args.headless || !io::stdout().is_terminal() {
        Box::new(TextRenderer::new(io::stdout(), colors))
    } else {
        Box::new(TerminalRenderer::new(colors))
    };

    let mut app = App::new(lines, renderer, io::stdout(), args.samples);
    if let Err(err) = app.run() {
        tracing::error!(%err, "session failed");
        eprintln!("Hata: {}", err);
        std::process::exit(1);
    }

    if args.log.is_some() {
        tracing::info!("parabola exited");
    }

    Ok(())
}
