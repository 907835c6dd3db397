//! Collision detection between the player and the obstacle
//!
//! Both entities are axis-aligned squares, so a discrete per-tick box overlap
//! test is enough. Boxes are half-open: touching edges do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Axis-aligned bounding box covering `[min, min + size)` on both axes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Square box with its top-left corner at `min`
    pub fn square(min: Vec2, edge: f32) -> Self {
        Self::new(min, Vec2::splat(edge))
    }

    /// Exclusive far corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Whether the two boxes share any area
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }
}

/// Player box at height `player_y` (x is fixed at a quarter of the screen)
pub fn player_box(tuning: &Tuning, player_y: f32) -> Aabb {
    Aabb::square(Vec2::new(tuning.player_x(), player_y), tuning.player_size)
}

/// Obstacle box at `(x, y)`
pub fn obstacle_box(tuning: &Tuning, x: f32, y: f32) -> Aabb {
    Aabb::square(Vec2::new(x, y), tuning.obstacle_size)
}

/// Pure overlap test for one sample instant
pub fn player_hits_obstacle(tuning: &Tuning, player_y: f32, obstacle_x: f32, obstacle_y: f32) -> bool {
    player_box(tuning, player_y).overlaps(&obstacle_box(tuning, obstacle_x, obstacle_y))
}
