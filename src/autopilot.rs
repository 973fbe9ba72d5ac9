//! Demo driver that plays the game by "pressing" arrow keys
//!
//! Used by the headless binary. It only produces [`DirectionKeys`], so it goes
//! through the same heading rules as a human player.

use crate::input::DirectionKeys;
use crate::sim::{GameState, GridPoint, GridSize};

/// Shortest signed offset from `from` to `to` on a wrapping axis.
///
/// Both cells must already lie in `[0, bound)`.
fn torus_offset(from: i32, to: i32, bound: i32) -> i32 {
    let forward = (to - from).rem_euclid(bound);
    if forward > bound - forward {
        forward - bound
    } else {
        forward
    }
}

/// Shortest wrap-aware offset between two cells
pub fn torus_delta(grid: GridSize, from: GridPoint, to: GridPoint) -> GridPoint {
    GridPoint::new(
        torus_offset(from.x, to.x, grid.columns()),
        torus_offset(from.y, to.y, grid.rows()),
    )
}

/// Hold the keys that lead toward the fruit; nothing when there is none
pub fn keys_toward_fruit(state: &GameState) -> DirectionKeys {
    let Some(fruit) = state.fruit() else {
        return DirectionKeys::default();
    };
    let delta = torus_delta(state.grid, state.head(), fruit);
    DirectionKeys {
        up: delta.y < 0,
        down: delta.y > 0,
        left: delta.x < 0,
        right: delta.x > 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::Direction;

    #[test]
    fn test_torus_offset_takes_short_way() {
        assert_eq!(torus_offset(1, 4, 32), 3);
        assert_eq!(torus_offset(1, 30, 32), -3);
        assert_eq!(torus_offset(30, 1, 32), 3);
        assert_eq!(torus_offset(5, 5, 32), 0);
    }

    #[test]
    fn test_torus_offset_on_widest_axis() {
        assert_eq!(torus_offset(0, i32::MAX - 1, i32::MAX), -1);
        assert_eq!(torus_offset(i32::MAX - 1, 0, i32::MAX), 1);
        assert_eq!(torus_offset(0, i32::MAX / 2, i32::MAX), i32::MAX / 2);
        assert_eq!(torus_offset(0, i32::MAX / 2 + 1, i32::MAX), -(i32::MAX / 2));
    }

    #[test]
    fn test_keys_on_widest_valid_grid() {
        let settings = Settings {
            screen_width: i32::MAX as u32,
            screen_height: 20,
            cell_size: 1,
            ..Default::default()
        }
        .validate()
        .unwrap();
        let mut state =
            GameState::with_body(&settings, &[GridPoint::new(0, 0)], Direction::Up, 1).unwrap();
        state.place_fruit(Some(GridPoint::new(i32::MAX - 1, 0)));

        let keys = keys_toward_fruit(&state);
        assert_eq!(keys, DirectionKeys::only(Direction::Left));
    }

    #[test]
    fn test_no_fruit_no_keys() {
        let settings = Settings::default().validate().unwrap();
        let state = GameState::new(&settings, 1);
        assert_eq!(keys_toward_fruit(&state), DirectionKeys::default());
    }

    #[test]
    fn test_keys_point_at_fruit_across_edge() {
        let settings = Settings::default().validate().unwrap();
        let mut state =
            GameState::with_body(&settings, &[GridPoint::new(0, 12)], Direction::Up, 1).unwrap();
        state.place_fruit(Some(GridPoint::new(30, 12)));

        let keys = keys_toward_fruit(&state);
        assert!(keys.left);
        assert!(!keys.right && !keys.up && !keys.down);
        assert_eq!(keys.requested(state.heading()), Some(Direction::Left));
    }
}
