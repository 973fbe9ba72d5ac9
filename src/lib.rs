//! Torus Snake - grid Snake on a wrap-around board
//!
//! Core modules:
//! - `sim`: Game state, fixed-rate tick gating, movement and fruit logic
//! - `input`: Raw arrow-key states to heading requests
//! - `renderer`: Snapshot to vertices / text
//! - `settings`: Startup configuration and validation

pub mod autopilot;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use input::DirectionKeys;
pub use settings::{Settings, SettingsError, ValidSettings};

/// Game loop constants
pub mod consts {
    /// Poll rate of the headless driver (a typical display refresh)
    pub const POLL_HZ: u32 = 60;
    /// Default run seed for the headless driver
    pub const DEFAULT_SEED: u64 = 0x5EED;
    /// Largest board the headless driver prints as text
    pub const MAX_TEXT_CELLS: i64 = 1 << 20;
}
