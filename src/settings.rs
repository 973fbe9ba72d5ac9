//! Game settings
//!
//! Loaded once at startup (JSON, every field optional) and validated into
//! [`ValidSettings`] before a game is created. Nothing is checked during play.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::{Direction, FruitCheck, GridPoint, GridSize};

/// Settings validation and loading errors
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Cell size of zero would divide the screen by zero
    #[error("cell size must be positive")]
    ZeroCellSize,

    /// Screen smaller than a single cell on some axis
    #[error("grid would be empty: {columns}x{rows} cells")]
    EmptyGrid { columns: i32, rows: i32 },

    /// More cells on an axis than a signed coordinate can address
    #[error("{axis} axis has {cells} cells, too many to address")]
    GridTooLarge { axis: &'static str, cells: u32 },

    /// Negative, NaN or infinite period
    #[error("invalid {name} period: {value} seconds")]
    InvalidPeriod { name: &'static str, value: f64 },

    /// Start cell outside the derived grid
    #[error("start cell ({x}, {y}) is outside the {columns}x{rows} grid")]
    StartOutOfBounds {
        x: i32,
        y: i32,
        columns: i32,
        rows: i32,
    },

    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Raw game settings as written by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title handed to the presentation layer
    pub title: String,

    // === Board ===
    /// Screen width in pixels
    pub screen_width: u32,
    /// Screen height in pixels
    pub screen_height: u32,
    /// Side of one square cell in pixels
    pub cell_size: u32,

    // === Timing ===
    /// Seconds between snake steps (controls snake speed)
    pub movement_period_secs: f64,
    /// Seconds between fruit respawns
    pub fruit_period_secs: f64,

    // === Start ===
    /// Starting cell; center of the grid when absent
    pub start_cell: Option<(i32, i32)>,
    /// Heading before the first key press
    pub initial_heading: Direction,

    /// Which head position is compared against the fruit
    pub fruit_check: FruitCheck,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Snake Game".to_string(),

            screen_width: 640,
            screen_height: 480,
            cell_size: 20,

            movement_period_secs: 1.0 / 6.0,
            fruit_period_secs: 10.0,

            start_cell: None,
            initial_heading: Direction::Right,

            fruit_check: FruitCheck::PreMoveHead,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Check every field and derive the grid
    pub fn validate(&self) -> Result<ValidSettings, SettingsError> {
        if self.cell_size == 0 {
            return Err(SettingsError::ZeroCellSize);
        }
        let columns = to_cells("horizontal", self.screen_width, self.cell_size)?;
        let rows = to_cells("vertical", self.screen_height, self.cell_size)?;
        let grid = GridSize::new(columns, rows)?;

        let movement_period = period("movement", self.movement_period_secs)?;
        let fruit_period = period("fruit", self.fruit_period_secs)?;

        let start = match self.start_cell {
            Some((x, y)) => {
                let cell = GridPoint::new(x, y);
                if !grid.contains(cell) {
                    return Err(SettingsError::StartOutOfBounds {
                        x,
                        y,
                        columns,
                        rows,
                    });
                }
                cell
            }
            None => grid.center(),
        };

        Ok(ValidSettings {
            title: self.title.clone(),
            grid,
            cell_size: self.cell_size,
            movement_period,
            fruit_period,
            start,
            initial_heading: self.initial_heading,
            fruit_check: self.fruit_check,
        })
    }
}

fn to_cells(axis: &'static str, pixels: u32, cell_size: u32) -> Result<i32, SettingsError> {
    let cells = pixels / cell_size;
    i32::try_from(cells).map_err(|_| SettingsError::GridTooLarge { axis, cells })
}

fn period(name: &'static str, secs: f64) -> Result<Duration, SettingsError> {
    Duration::try_from_secs_f64(secs).map_err(|_| SettingsError::InvalidPeriod { name, value: secs })
}

/// Settings that passed validation; the only input a [`GameState`](crate::sim::GameState) accepts
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSettings {
    pub title: String,
    pub grid: GridSize,
    pub cell_size: u32,
    pub movement_period: Duration,
    pub fruit_period: Duration,
    pub start: GridPoint,
    pub initial_heading: Direction,
    pub fruit_check: FruitCheck,
}

impl ValidSettings {
    /// Window size in pixels (the grid area, trimmed to whole cells)
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            self.grid.columns() as u32 * self.cell_size,
            self.grid.rows() as u32 * self.cell_size,
        )
    }
}
