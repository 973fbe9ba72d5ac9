//! Text frame for headless runs

use crate::sim::{GridPoint, GridSize, Snapshot};

const EMPTY: char = '.';
const FRUIT: char = '*';
const BODY: char = 'o';
const HEAD: char = '@';

/// Render one character per cell, one line per row.
///
/// Later layers overwrite earlier ones: fruit, body, then head.
pub fn render(snapshot: &Snapshot, grid: GridSize) -> String {
    let columns = grid.columns() as usize;
    let rows = grid.rows() as usize;
    let mut cells = vec![EMPTY; columns * rows];

    let mut put = |x: i32, y: i32, ch: char| {
        if grid.contains(GridPoint::new(x, y)) {
            cells[y as usize * columns + x as usize] = ch;
        }
    };

    if let Some(fruit) = snapshot.fruit {
        put(fruit.x, fruit.y, FRUIT);
    }
    for segment in snapshot.snake.iter().skip(1) {
        put(segment.x, segment.y, BODY);
    }
    if let Some(head) = snapshot.snake.first() {
        put(head.x, head.y, HEAD);
    }

    let mut out = String::with_capacity((columns + 1) * rows);
    for row in cells.chunks(columns) {
        out.extend(row);
        out.push('\n');
    }
    out
}
