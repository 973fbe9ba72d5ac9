//! Draw preparation
//!
//! Turns a [`Snapshot`](crate::sim::Snapshot) into pixel-space vertices for a
//! GPU backend, or into text for headless runs. No window or device lives here.

pub mod ascii;
pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors};
