//! Tap Survival - a one-button gravity dodger
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacle cycle, collisions, game state)
//! - `tuning`: Data-driven game balance (sizes, forces, timings)
//! - `runner`: Monotonic-clock tick driver for hosts

pub mod runner;
pub mod sim;
pub mod tuning;

pub use runner::{Command, Driver};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Fixed simulation tick (20 Hz)
    pub const TICK_INTERVAL_MS: f32 = 50.0;
    /// Shortest tick the driver can represent (1 µs)
    pub const MIN_TICK_INTERVAL_MS: f32 = 0.001;
    /// Maximum ticks per driver frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 360.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;

    /// Player square edge length
    pub const PLAYER_SIZE: f32 = 50.0;
    /// Obstacle square edge length
    pub const OBSTACLE_SIZE: f32 = 60.0;

    /// Downward acceleration (units/tick²), applied after displacement
    pub const GRAVITY: f32 = 3.0;
    /// Velocity set by a jump (units/tick, negative is up)
    pub const JUMP_FORCE: f32 = -20.0;

    /// Time for the obstacle to cross from the right edge to fully off-screen
    pub const OBSTACLE_TRAVERSAL_MS: f32 = 4000.0;
    /// Session ends when no jump arrives for this long
    pub const INACTIVITY_TIMEOUT_MS: f32 = 2000.0;
}
