//! Idle/demo mode controller
//!
//! Keeps the player bobbing around a target height: mid-screen while the lane
//! is clear, or the half of the screen away from an incoming obstacle.

use super::state::GameState;

/// How far ahead of the player (in x) an obstacle counts as incoming
const LOOKAHEAD: f32 = 120.0;
/// Fraction of the inactivity timeout after which a jump is forced
const IDLE_MARGIN: f64 = 0.75;

/// Height the autopilot tries to stay at
pub fn target_y(state: &GameState) -> f32 {
    let tuning = &state.tuning;
    let floor = tuning.floor_y();
    let obstacle = &state.obstacle;

    let player_left = tuning.player_x();
    let player_right = player_left + tuning.player_size;
    let incoming = obstacle.x < player_right + LOOKAHEAD
        && obstacle.x + tuning.obstacle_size > player_left;

    if !incoming {
        return floor * 0.5;
    }

    let obstacle_center = obstacle.y + tuning.obstacle_size * 0.5;
    if obstacle_center > tuning.screen_height * 0.5 {
        floor * 0.25
    } else {
        floor * 0.75
    }
}

/// Whether the autopilot would tap this tick
pub fn wants_jump(state: &GameState) -> bool {
    if !state.is_running() {
        return false;
    }

    let tuning = &state.tuning;
    let player = &state.player;
    let next_y = player.y + player.vel_y;

    // Two ticks out the floor would be reached
    if next_y + player.vel_y + tuning.gravity >= tuning.floor_y() && player.vel_y >= 0.0 {
        return true;
    }

    if state.idle_ms() > f64::from(tuning.inactivity_timeout_ms) * IDLE_MARGIN {
        return true;
    }

    player.vel_y >= 0.0 && next_y > target_y(state)
}
