//! Shape generation for grid cells

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::sim::{GridPoint, Snapshot};

/// Two triangles covering one cell, in pixel space
pub fn cell_quad(cell: GridPoint, cell_size: u32, color: [f32; 4]) -> [Vertex; 6] {
    let size = cell_size as f32;
    let min = cell.as_vec2() * size;
    let max = min + Vec2::splat(size);

    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Vertices for a whole frame: fruit first, then the snake on top
pub fn frame(snapshot: &Snapshot, cell_size: u32) -> Vec<Vertex> {
    let cells = snapshot.snake.len() + usize::from(snapshot.fruit.is_some());
    let mut vertices = Vec::with_capacity(cells * 6);

    if let Some(fruit) = snapshot.fruit {
        vertices.extend(cell_quad(fruit, cell_size, colors::FRUIT));
    }
    for &segment in &snapshot.snake {
        vertices.extend(cell_quad(segment, cell_size, colors::SNAKE));
    }

    vertices
}
