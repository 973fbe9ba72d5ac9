//! Game state and core simulation types
//!
//! Everything the update loop touches lives on [`GameState`]: the snake body,
//! its heading, the single fruit slot, both cooldowns and the RNG.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::GameClock;
use super::grid::{Direction, GridPoint, GridSize};
use crate::settings::ValidSettings;

/// Which head position is compared against the fruit on a movement tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FruitCheck {
    /// The head before this tick's step. The snake grows one tick after
    /// reaching the fruit cell.
    #[default]
    PreMoveHead,
    /// The freshly computed head. The snake grows on the tick it enters the cell.
    NewHead,
}

/// Read-only view handed to the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Head first
    pub snake: Vec<GridPoint>,
    /// `None` while no fruit is placed
    pub fruit: Option<GridPoint>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Fruit placement RNG
    pub(super) rng: Pcg32,
    /// Movement and fruit cooldowns
    pub clock: GameClock,
    /// Board dimensions
    pub grid: GridSize,
    /// Fruit collision rule
    pub fruit_check: FruitCheck,
    /// Body cells, head first. Never empty.
    pub(super) snake: Vec<GridPoint>,
    pub(super) heading: Direction,
    pub(super) fruit: Option<GridPoint>,
}

impl GameState {
    /// Create a new game with a one-cell snake at the configured start
    pub fn new(settings: &ValidSettings, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            clock: GameClock::new(settings.movement_period, settings.fruit_period),
            grid: settings.grid,
            fruit_check: settings.fruit_check,
            snake: vec![settings.start],
            heading: settings.initial_heading,
            fruit: None,
        }
    }

    /// Create a game with an explicit body and heading.
    ///
    /// Cells are wrapped onto the grid. Returns `None` for an empty body.
    pub fn with_body(
        settings: &ValidSettings,
        body: &[GridPoint],
        heading: Direction,
        seed: u64,
    ) -> Option<Self> {
        if body.is_empty() {
            return None;
        }
        let mut state = Self::new(settings, seed);
        state.snake = body.iter().map(|&cell| state.grid.wrap(cell)).collect();
        state.heading = heading;
        Some(state)
    }

    pub fn snake(&self) -> &[GridPoint] {
        &self.snake
    }

    pub fn head(&self) -> GridPoint {
        self.snake[0]
    }

    pub fn length(&self) -> usize {
        self.snake.len()
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn fruit(&self) -> Option<GridPoint> {
        self.fruit
    }

    /// Put the fruit somewhere (wrapped onto the grid), or clear it
    pub fn place_fruit(&mut self, cell: Option<GridPoint>) {
        self.fruit = cell.map(|c| self.grid.wrap(c));
    }

    /// Offer a new heading from the input layer.
    ///
    /// Accepted only when it lies on the other axis from the current heading,
    /// so same-axis requests (including reversal) are dropped. Takes effect on
    /// the next movement tick. Returns whether the heading changed.
    pub fn set_requested_direction(&mut self, candidate: Direction) -> bool {
        let Some(axis) = candidate.axis() else {
            return false;
        };
        if self.heading.axis() == Some(axis) {
            return false;
        }
        log::trace!("heading {} -> {}", self.heading.as_str(), candidate.as_str());
        self.heading = candidate;
        true
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.snake.clone(),
            fruit: self.fruit,
        }
    }
}
