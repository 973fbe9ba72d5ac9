//! Fixed-rate tick gating
//!
//! The presentation loop polls far more often than the snake should move.
//! Each gated action owns a [`Cooldown`]; the caller passes the current time
//! in and decides what to do when a cooldown is ready.

use std::time::Duration;

/// A repeating cooldown measured against caller-supplied timestamps.
///
/// Timestamps are durations since session start. A cooldown that has never
/// fired is ready immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cooldown {
    period: Duration,
    last_fired: Option<Duration>,
}

impl Cooldown {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            last_fired: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn last_fired(&self) -> Option<Duration> {
        self.last_fired
    }

    /// True once at least `period` has elapsed since the last firing
    pub fn is_ready(&self, now: Duration) -> bool {
        match self.last_fired {
            None => true,
            Some(last) => now.saturating_sub(last) >= self.period,
        }
    }

    pub fn fire(&mut self, now: Duration) {
        self.last_fired = Some(now);
    }
}

/// The two independent cooldowns that drive a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameClock {
    pub movement: Cooldown,
    pub fruit: Cooldown,
}

impl GameClock {
    pub fn new(movement_period: Duration, fruit_period: Duration) -> Self {
        Self {
            movement: Cooldown::new(movement_period),
            fruit: Cooldown::new(fruit_period),
        }
    }

    pub fn should_fire_movement(&self, now: Duration) -> bool {
        self.movement.is_ready(now)
    }

    pub fn should_fire_fruit_spawn(&self, now: Duration) -> bool {
        self.fruit.is_ready(now)
    }

    pub fn mark_movement(&mut self, now: Duration) {
        self.movement.fire(now);
    }

    pub fn mark_fruit_spawn(&mut self, now: Duration) {
        self.fruit.fire(now);
    }
}
