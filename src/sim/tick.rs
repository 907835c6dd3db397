//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. One tick runs,
//! in order: clock, physics, inactivity, obstacle cycle, collision. The
//! collision check therefore samples the player after integration and the
//! obstacle after it moved.

use super::autopilot;
use super::collision::player_hits_obstacle;
use super::physics::inactivity_expired;
use super::state::{GamePhase, GameState, TerminalCause};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Return to the start screen with everything reset
    pub restart: bool,
    /// Begin a session (tap on the start button)
    pub start: bool,
    /// Upward impulse (tap on the play area)
    pub jump: bool,
    /// Idle/demo mode - autopilot decides when to jump
    pub idle_mode: bool,
}

/// Apply commands, then advance the game state by one fixed tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.restart {
        state.restart();
    }
    if input.start {
        state.start();
    }
    if input.jump || (input.idle_mode && autopilot::wants_jump(state)) {
        state.jump();
    }
    step(state);
}

/// Like [`tick`], but only if `session` is still current
///
/// Hosts that schedule callbacks tag them with the session they were created
/// under; once a reset has happened those callbacks must do nothing.
pub fn tick_session(state: &mut GameState, session: u64, input: &TickInput) -> bool {
    if state.session != session {
        log::debug!(
            "Dropping tick for stale session {} (current {})",
            session,
            state.session
        );
        return false;
    }
    tick(state, input);
    true
}

/// Move the engine clock over time the host could not simulate
///
/// Physics and the obstacle stay frozen across a skipped span, but the
/// inactivity timeout is wall-clock and still fires.
pub fn skip(state: &mut GameState, dt_ms: f64) {
    assert!(
        dt_ms.is_finite() && dt_ms >= 0.0,
        "clock skipped by invalid delta {dt_ms}"
    );
    state.time_ms += dt_ms;

    if state.phase == GamePhase::Running
        && inactivity_expired(
            state.time_ms,
            state.last_input_ms,
            state.tuning.inactivity_timeout_ms,
        )
    {
        state.end_session(TerminalCause::Inactivity);
    }
}

/// Advance the simulation by one tick with no new input
pub fn step(state: &mut GameState) {
    let dt_ms = state.tuning.tick_interval_ms;
    state.time_ms += f64::from(dt_ms);
    assert!(state.time_ms.is_finite(), "engine clock overflowed");

    // Ticks are inert outside a running session
    if state.phase != GamePhase::Running {
        return;
    }
    state.session_ticks += 1;

    let tuning = state.tuning;

    if let Some(cause) = state.player.integrate(tuning.gravity, tuning.floor_y()) {
        state.end_session(cause);
        return;
    }

    if inactivity_expired(state.time_ms, state.last_input_ms, tuning.inactivity_timeout_ms) {
        state.end_session(TerminalCause::Inactivity);
        return;
    }

    state.obstacle.advance(&tuning, dt_ms);
    while state.obstacle.is_complete(&tuning) {
        let carry = state.obstacle.overrun_ms(&tuning);
        if !state.complete_traversal(carry) {
            break;
        }
    }

    if player_hits_obstacle(&tuning, state.player.y, state.obstacle.x, state.obstacle.y) {
        state.end_session(TerminalCause::Collision);
    }
}
