//! Per-poll update
//!
//! The presentation loop calls [`tick`] once per poll with the held arrow keys
//! and the current time. Heading and fruit updates run every poll; the snake
//! only steps when the movement cooldown is ready.

use std::time::Duration;

use rand::Rng;

use super::grid::{Direction, GridPoint};
use super::state::{FruitCheck, GameState};
use crate::input::DirectionKeys;

/// Result of one movement tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Body shifted one cell, length unchanged
    Moved,
    /// Fruit eaten, body grew by one
    Grew,
}

/// What happened during one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub fruit_spawned: bool,
    /// `None` when the movement cooldown was not ready
    pub step: Option<StepOutcome>,
}

/// Advance the game by one poll of the presentation loop
pub fn tick(state: &mut GameState, keys: &DirectionKeys, now: Duration) -> TickReport {
    let requested = keys.requested(state.heading());
    state.advance(requested, now)
}

impl GameState {
    /// Run one poll with an already resolved heading request
    pub fn advance(&mut self, requested: Option<Direction>, now: Duration) -> TickReport {
        if let Some(dir) = requested {
            self.set_requested_direction(dir);
        }

        let fruit_spawned = self.update_fruit(now);

        if !self.clock.should_fire_movement(now) {
            return TickReport {
                fruit_spawned,
                step: None,
            };
        }
        let outcome = self.step();
        self.clock.mark_movement(now);

        TickReport {
            fruit_spawned,
            step: Some(outcome),
        }
    }

    /// Respawn the fruit if its cooldown is ready.
    ///
    /// The new cell is drawn uniformly per axis and may land on the snake.
    /// An uneaten fruit is simply replaced.
    pub fn update_fruit(&mut self, now: Duration) -> bool {
        if !self.clock.should_fire_fruit_spawn(now) {
            return false;
        }
        let cell = GridPoint::new(
            self.rng.random_range(0..self.grid.columns()),
            self.rng.random_range(0..self.grid.rows()),
        );
        log::debug!("fruit spawned at ({}, {})", cell.x, cell.y);
        self.fruit = Some(cell);
        self.clock.mark_fruit_spawn(now);
        true
    }

    /// Move the snake one cell along its heading, growing if it eats.
    ///
    /// Ungated: [`advance`](Self::advance) decides when to call this.
    pub fn step(&mut self) -> StepOutcome {
        let head = self.head();
        let new_head = self.grid.wrap(head + self.heading.delta());

        let probe = match self.fruit_check {
            FruitCheck::PreMoveHead => head,
            FruitCheck::NewHead => new_head,
        };

        self.snake.insert(0, new_head);

        if self.fruit == Some(probe) {
            self.fruit = None;
            log::debug!(
                "fruit eaten at ({}, {}), length {}",
                probe.x,
                probe.y,
                self.snake.len()
            );
            return StepOutcome::Grew;
        }

        self.snake.pop();
        log::trace!("head -> ({}, {})", new_head.x, new_head.y);
        StepOutcome::Moved
    }
}
