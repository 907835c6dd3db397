//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, one engine clock
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod obstacle;
pub mod physics;
pub mod state;
pub mod tick;

pub use collision::{Aabb, obstacle_box, player_box, player_hits_obstacle};
pub use obstacle::{Obstacle, traversal_x};
pub use physics::{Player, inactivity_expired};
pub use state::{GameEvent, GamePhase, GameState, Snapshot, TerminalCause};
pub use tick::{TickInput, skip, step, tick, tick_session};
