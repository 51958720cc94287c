use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use toroidal_life::game::{Grid, LifeConfig, Rule};
use toroidal_life::loader::{FileLoader, PatternLoader};
use toroidal_life::modes::{Controller, HeadlessRun, InteractiveMode};
use toroidal_life::render::board_lines;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "toroidal_life")]
#[command(version, about = "Conway's Game of Life on a wraparound terminal grid")]
struct Cli {
    /// How to run
    #[arg(long, value_enum, default_value = "interactive")]
    mode: Mode,

    /// Grid width
    #[arg(long, default_value = "80")]
    width: usize,

    /// Grid height
    #[arg(long, default_value = "25")]
    height: usize,

    /// Delay between generations at speed 1, in milliseconds
    #[arg(long, default_value = "90")]
    turn_interval_ms: u64,

    /// Birth/survival rule in B/S notation
    #[arg(long, default_value = "B3/S23")]
    rule: Rule,

    /// Pattern file to load before starting
    #[arg(long)]
    pattern: Option<PathBuf>,

    /// Fill the grid at random with this share of live cells (0.0 - 1.0)
    #[arg(long, conflicts_with = "pattern", value_parser = parse_density)]
    random: Option<f64>,

    /// Generations to run in headless mode
    #[arg(long, default_value = "100")]
    generations: u64,

    /// Write logs to this file (the terminal UI owns the screen)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Menu-driven terminal session
    Interactive,
    /// Run generations without a terminal and print the final board
    Headless,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_file.as_deref(), matches!(cli.mode, Mode::Headless))?;

    // Create configuration from CLI arguments
    let config = LifeConfig {
        grid_width: cli.width,
        grid_height: cli.height,
        turn_interval_ms: cli.turn_interval_ms,
        rule: cli.rule,
        ..LifeConfig::default()
    };

    let seed = seed_grid(&cli, &config)?;

    // Dispatch to appropriate mode
    match cli.mode {
        Mode::Interactive => {
            let mut controller = Controller::new(config).context("Failed to create grid")?;
            controller.apply_pattern(&seed);

            let mut interactive = InteractiveMode::new(controller);
            interactive.run().await?;
        }
        Mode::Headless => {
            let report = HeadlessRun::new(&config, seed).run(cli.generations);

            for line in board_lines(&report.grid, None) {
                println!("{line}");
            }
            println!(
                "generations: {}  population: {}  extinct: {}  settled: {}",
                report.generations,
                report.grid.population(),
                report.extinct,
                report.settled
            );
        }
    }

    Ok(())
}

/// Starting board from `--pattern` or `--random`, empty otherwise
fn seed_grid(cli: &Cli, config: &LifeConfig) -> Result<Grid> {
    let (height, width) = (config.grid_height, config.grid_width);

    if let Some(path) = &cli.pattern {
        return FileLoader::new()
            .open_and_parse(path, height, width)
            .with_context(|| format!("Failed to load pattern from {:?}", path));
    }

    let mut grid = Grid::new(height, width).context("Failed to create grid")?;
    if let Some(density) = cli.random {
        grid.randomize(&mut rand::thread_rng(), density);
    }
    Ok(grid)
}

/// Share of live cells for `--random`, a finite number in 0.0..=1.0
fn parse_density(s: &str) -> Result<f64, String> {
    let density: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if !(0.0..=1.0).contains(&density) {
        return Err(format!("density must be between 0.0 and 1.0, got {s}"));
    }
    Ok(density)
}

/// Install a tracing subscriber writing to `log_file`, or to stderr when the
/// terminal UI is not running
fn init_tracing(log_file: Option<&Path>, stderr_fallback: bool) -> Result<()> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {:?}", path))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None if stderr_fallback => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(std::io::stderr)
                .init();
        }
        None => {}
    }

    Ok(())
}
