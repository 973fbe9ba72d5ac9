//! Raw directional key states from the presentation layer
//!
//! The window layer reports which arrow keys are held on each poll; this
//! module turns that into at most one heading request.

use crate::sim::Direction;

/// Arrow keys held during one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionKeys {
    /// Keys with only `dir` held
    pub fn only(dir: Direction) -> Self {
        Self {
            up: dir == Direction::Up,
            down: dir == Direction::Down,
            left: dir == Direction::Left,
            right: dir == Direction::Right,
        }
    }

    pub fn is_pressed(&self, dir: Direction) -> bool {
        match dir {
            Direction::None => false,
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Pick the heading to request given the current one.
    ///
    /// Keys are scanned Up, Down, Left, Right; the first held key on the other
    /// axis from `heading` wins. Same-axis keys never block a cross-axis key
    /// held at the same time.
    pub fn requested(&self, heading: Direction) -> Option<Direction> {
        let current = heading.axis();
        Direction::ALL
            .into_iter()
            .find(|&dir| self.is_pressed(dir) && dir.axis() != current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keys_no_request() {
        assert_eq!(DirectionKeys::default().requested(Direction::Right), None);
    }

    #[test]
    fn test_same_axis_key_is_not_requested() {
        let keys = DirectionKeys::only(Direction::Left);
        assert_eq!(keys.requested(Direction::Right), None);
        assert_eq!(keys.requested(Direction::Up), Some(Direction::Left));
    }

    #[test]
    fn test_priority_order() {
        let keys = DirectionKeys {
            up: true,
            down: true,
            left: true,
            right: true,
        };
        assert_eq!(keys.requested(Direction::Right), Some(Direction::Up));
        assert_eq!(keys.requested(Direction::Down), Some(Direction::Left));
        assert_eq!(keys.requested(Direction::None), Some(Direction::Up));
    }

    #[test]
    fn test_cross_axis_key_beats_blocked_key() {
        // Moving up with Up and Right held: Up is blocked, Right goes through
        let keys = DirectionKeys {
            up: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(keys.requested(Direction::Up), Some(Direction::Right));
    }

    #[test]
    fn test_only_sets_one_key() {
        let keys = DirectionKeys::only(Direction::Down);
        assert!(keys.is_pressed(Direction::Down));
        assert!(!keys.is_pressed(Direction::Up));
        assert!(!keys.is_pressed(Direction::None));
        assert_eq!(DirectionKeys::only(Direction::None), DirectionKeys::default());
    }
}
