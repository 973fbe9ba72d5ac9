//! Grid coordinates, headings and toroidal wrap
//!
//! Cells are addressed by signed integer coordinates so that a step off the
//! left or top edge can be expressed before it is wrapped back into range.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::settings::SettingsError;

/// Integer cell coordinate. Always within `[0, columns) x [0, rows)` once wrapped.
pub type GridPoint = IVec2;

/// Reduce `v` into `[0, bound)`.
///
/// Both axes use the same symmetric rule, so leaving any edge re-enters at the
/// opposite one. `bound` must be positive; [`GridSize`] guarantees that.
#[inline]
pub fn normalize(v: i32, bound: i32) -> i32 {
    debug_assert!(bound > 0, "grid bound must be positive");
    v.rem_euclid(bound)
}

/// Board dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    columns: i32,
    rows: i32,
}

impl GridSize {
    /// Create a grid, rejecting empty axes
    pub fn new(columns: i32, rows: i32) -> Result<Self, SettingsError> {
        if columns <= 0 || rows <= 0 {
            return Err(SettingsError::EmptyGrid { columns, rows });
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Middle cell (rounded down), where a new snake starts by default
    pub fn center(&self) -> GridPoint {
        IVec2::new(self.columns / 2, self.rows / 2)
    }

    pub fn contains(&self, point: GridPoint) -> bool {
        (0..self.columns).contains(&point.x) && (0..self.rows).contains(&point.y)
    }

    /// Wrap both axes of `point` onto the torus
    #[inline]
    pub fn wrap(&self, point: GridPoint) -> GridPoint {
        IVec2::new(normalize(point.x, self.columns), normalize(point.y, self.rows))
    }
}

/// Movement axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Snake heading.
///
/// `None` is the zero-vector sentinel that only exists before the first real
/// input; the other variants are the four axis-aligned unit steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All real headings, in input priority order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Cell offset for one step (screen coordinates, y grows downward)
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::None => IVec2::ZERO,
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    pub fn axis(self) -> Option<Axis> {
        match self {
            Direction::None => None,
            Direction::Up | Direction::Down => Some(Axis::Vertical),
            Direction::Left | Direction::Right => Some(Axis::Horizontal),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::None => "None",
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        }
    }
}
