//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with pixel position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const FRUIT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const SNAKE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
