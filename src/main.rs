//! Torus Snake entry point
//!
//! Runs a headless session: settings are loaded and validated, an autopilot
//! holds the arrow keys, and a virtual clock polls the game at a fixed rate.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use torus_snake::consts::{DEFAULT_SEED, MAX_TEXT_CELLS, POLL_HZ};
use torus_snake::renderer::{ascii, shapes};
use torus_snake::sim::{GameState, StepOutcome, tick};
use torus_snake::{Settings, SettingsError, autopilot};

/// Headless Snake on a wrap-around grid
#[derive(Parser)]
#[command(name = "torus-snake")]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON settings file (defaults are used when omitted)
    settings: Option<PathBuf>,

    /// RNG seed for fruit placement
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Number of polls to run
    #[arg(long, default_value_t = 600)]
    polls: u32,

    /// Print the final snapshot as JSON instead of a text frame
    #[arg(long)]
    json: bool,

    /// Write the final frame's raw vertex buffer to this file
    #[arg(long)]
    dump_frame: Option<PathBuf>,
}

/// Binary-level failures
#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write frame to {path}: {source}")]
    DumpFrame {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let settings = match &cli.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let settings = settings.validate()?;

    let (width, height) = settings.pixel_size();
    log::info!(
        "{} starting: {}x{} px, {}x{} cells, seed {}",
        settings.title,
        width,
        height,
        settings.grid.columns(),
        settings.grid.rows(),
        cli.seed
    );

    let mut state = GameState::new(&settings, cli.seed);
    let poll = Duration::from_secs(1) / POLL_HZ;
    let mut steps = 0u32;

    for i in 0..cli.polls {
        let now = poll * i;
        let keys = autopilot::keys_toward_fruit(&state);
        let report = tick(&mut state, &keys, now);

        match report.step {
            Some(StepOutcome::Grew) => {
                steps += 1;
                log::info!("ate fruit at {:.2}s, length {}", now.as_secs_f64(), state.length());
            }
            Some(StepOutcome::Moved) => steps += 1,
            None => {}
        }
    }

    let snapshot = state.snapshot();
    log::info!(
        "finished: {} polls, {} steps, length {}",
        cli.polls,
        steps,
        state.length()
    );

    if let Some(path) = &cli.dump_frame {
        let vertices = shapes::frame(&snapshot, settings.cell_size);
        std::fs::write(path, bytemuck::cast_slice::<_, u8>(vertices.as_slice())).map_err(|source| {
            AppError::DumpFrame {
                path: path.clone(),
                source,
            }
        })?;
        log::info!("wrote {} vertices to {}", vertices.len(), path.display());
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        let cells = i64::from(settings.grid.columns()) * i64::from(settings.grid.rows());
        if cells <= MAX_TEXT_CELLS {
            print!("{}", ascii::render(&snapshot, settings.grid));
        } else {
            log::warn!("{cells} cells is too many for a text frame, use --json");
        }
    }
    Ok(())
}
