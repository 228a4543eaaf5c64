use std::fs::{self, File};
use std::io;
use std::panic;
use std::path::PathBuf;

use clap::Parser;
use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};
use thiserror::Error;
use torus_snake::config::{
    APP_DIR_NAME, DEFAULT_GRID_SIZE, DEFAULT_SPEED, MAX_GRID_SIZE, MAX_SPEED, MIN_GRID_SIZE,
    MIN_SPEED,
};
use torus_snake::driver::{Clock, LoopDriver, SystemClock};
use torus_snake::game::{GameState, Speed};
use torus_snake::grid::GridSize;
use torus_snake::score::{JsonScoreStore, default_scores_path};
use torus_snake::terminal_runtime::{TerminalHost, TerminalSession, cleanup_terminal_best_effort};

const LOG_FILE_NAME: &str = "torus-snake.log";

/// Wrap-around Snake for the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Grid side length in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE,
          value_parser = clap::value_parser!(u16).range(i64::from(MIN_GRID_SIZE)..=i64::from(MAX_GRID_SIZE)))]
    grid: u16,

    /// Speed multiplier; the tick interval is 160 ms divided by this.
    #[arg(long, default_value_t = DEFAULT_SPEED,
          value_parser = clap::value_parser!(u8).range(i64::from(MIN_SPEED)..=i64::from(MAX_SPEED)))]
    speed: u8,

    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// High score file (defaults to the platform data directory).
    #[arg(long = "scores-file")]
    scores_file: Option<PathBuf>,

    /// Log file (defaults to the platform data directory).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log every command and step outcome.
    #[arg(long)]
    verbose: bool,

    /// Disable mouse capture (drag-to-steer).
    #[arg(long = "no-mouse")]
    no_mouse: bool,
}

#[derive(Debug, Error)]
enum AppError {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("logger already initialized: {0}")]
    Logger(#[from] log::SetLoggerError),
}

fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(cli) {
        eprintln!("torus-snake: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    init_logging(cli.log_file.clone(), cli.verbose)?;

    let grid = GridSize::new(cli.grid);
    let speed = Speed::new(cli.speed);
    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(grid, seed),
        None => GameState::new(grid),
    }
    .with_speed(speed);

    let store = JsonScoreStore::new(cli.scores_file.unwrap_or_else(default_scores_path));
    info!(
        "starting on {}x{} grid at {}x speed, scores in {}",
        grid.side(),
        grid.side(),
        speed.multiplier(),
        store.path().display()
    );

    let mouse_capture = !cli.no_mouse;
    install_panic_hook(mouse_capture);

    let clock = SystemClock;
    let mut driver = LoopDriver::new(state, store, clock.now());
    let session = TerminalSession::enter(mouse_capture)?;
    let mut host = TerminalHost::new(session, clock, speed, grid);

    driver.run(&mut host)?;

    info!("quit with high score {}", driver.state().high_score);
    Ok(())
}

fn init_logging(path: Option<PathBuf>, verbose: bool) -> Result<(), AppError> {
    let path = path.unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| AppError::LogFile {
            path: path.clone(),
            source,
        })?;
    }

    let file = File::create(&path).map_err(|source| AppError::LogFile {
        path: path.clone(),
        source,
    })?;
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    WriteLogger::init(level, Config::default(), file)?;
    Ok(())
}

fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}

fn install_panic_hook(mouse_capture: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal_best_effort(mouse_capture);
        default_hook(panic_info);
    }));
}
