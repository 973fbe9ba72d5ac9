//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time is passed in, never read from the OS
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod clock;
pub mod grid;
pub mod state;
pub mod tick;

pub use clock::{Cooldown, GameClock};
pub use grid::{Axis, Direction, GridPoint, GridSize, normalize};
pub use state::{FruitCheck, GameState, Snapshot};
pub use tick::{StepOutcome, TickReport, tick};
