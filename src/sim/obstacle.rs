//! Obstacle traversal cycle
//!
//! The obstacle crosses the screen right-to-left on a closed-form timeline:
//! `x(t) = screen_width - (t / duration) * (screen_width + obstacle_size)`.
//! Position is always derived from `elapsed_ms`, so any clock sample gives the
//! same answer as the animation would.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// The single obstacle of a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Top edge, fixed for one traversal
    pub y: f32,
    /// Time into the current traversal (ms)
    pub elapsed_ms: f32,
}

/// Obstacle x after `elapsed_ms` of a traversal (clamped to the end point)
pub fn traversal_x(tuning: &Tuning, elapsed_ms: f32) -> f32 {
    let progress = (elapsed_ms / tuning.obstacle_traversal_duration_ms).clamp(0.0, 1.0);
    tuning.screen_width - progress * (tuning.screen_width + tuning.obstacle_size)
}

/// Uniform spawn height in `[0, screen_height - obstacle_size)`
fn sample_spawn_y(tuning: &Tuning, rng: &mut impl Rng) -> f32 {
    let max = tuning.spawn_y_max();
    assert!(max > 0.0, "obstacle does not fit on screen");
    let y = rng.random_range(0.0..max);
    debug_assert!((0.0..max).contains(&y));
    y
}

impl Obstacle {
    /// Fresh obstacle at the right edge with a random height
    pub fn spawn(tuning: &Tuning, rng: &mut impl Rng) -> Self {
        Self {
            x: tuning.screen_width,
            y: sample_spawn_y(tuning, rng),
            elapsed_ms: 0.0,
        }
    }

    /// Start the next traversal, keeping `carry_ms` of time already spent in it
    pub fn respawn(&mut self, tuning: &Tuning, rng: &mut impl Rng, carry_ms: f32) {
        self.y = sample_spawn_y(tuning, rng);
        self.elapsed_ms = carry_ms.max(0.0);
        self.x = traversal_x(tuning, self.elapsed_ms);
    }

    /// Move along the timeline by `dt_ms`
    pub fn advance(&mut self, tuning: &Tuning, dt_ms: f32) {
        assert!(
            dt_ms.is_finite() && dt_ms >= 0.0,
            "obstacle advanced by invalid delta {dt_ms}"
        );
        self.elapsed_ms += dt_ms;
        self.x = traversal_x(tuning, self.elapsed_ms);
    }

    /// Whether the current traversal has reached the left edge
    pub fn is_complete(&self, tuning: &Tuning) -> bool {
        self.elapsed_ms >= tuning.obstacle_traversal_duration_ms
    }

    /// Time spent past the end of the traversal
    pub fn overrun_ms(&self, tuning: &Tuning) -> f32 {
        (self.elapsed_ms - tuning.obstacle_traversal_duration_ms).max(0.0)
    }

    /// x at `ahead_ms` past the current sample, for smooth rendering
    pub fn x_ahead(&self, tuning: &Tuning, ahead_ms: f32) -> f32 {
        traversal_x(tuning, self.elapsed_ms + ahead_ms)
    }
}
