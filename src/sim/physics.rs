//! Player physics
//!
//! Explicit Euler in tick units: displace with the current velocity, then
//! accelerate. Position always uses the pre-acceleration velocity.

use serde::{Deserialize, Serialize};

use super::state::TerminalCause;

/// The player square. Horizontal position is fixed, only `y` moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner y
    pub y: f32,
    /// Signed vertical speed (units/tick, positive is down); never clamped
    pub vel_y: f32,
}

impl Player {
    /// A player at rest at height `y`
    pub fn at(y: f32) -> Self {
        Self { y, vel_y: 0.0 }
    }

    /// Overwrite velocity with the jump impulse (no stacking)
    pub fn jump(&mut self, force: f32) {
        self.vel_y = force;
    }

    /// Advance one tick
    ///
    /// Returns the boundary the player crossed, if any. The position is clamped
    /// to `[0, floor_y]` either way.
    pub fn integrate(&mut self, gravity: f32, floor_y: f32) -> Option<TerminalCause> {
        let mut new_y = self.y + self.vel_y;
        let mut breach = None;

        if new_y > floor_y {
            new_y = floor_y;
            breach = Some(TerminalCause::Floor);
        } else if new_y < 0.0 {
            new_y = 0.0;
            breach = Some(TerminalCause::Ceiling);
        }

        self.y = new_y;
        self.vel_y += gravity;
        breach
    }
}

/// True once strictly more than `timeout_ms` has passed since the last input
#[inline]
pub fn inactivity_expired(now_ms: f64, last_input_ms: f64, timeout_ms: f32) -> bool {
    now_ms - last_input_ms > f64::from(timeout_ms)
}
