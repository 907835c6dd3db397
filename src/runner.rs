//! Monotonic-clock tick driver
//!
//! Hosts feed `Instant`s from their frame loop; the driver turns elapsed time
//! into whole engine ticks with an accumulator, so physics, the inactivity
//! timeout and the obstacle all run off the same clock.

use std::time::{Duration, Instant};

use crate::consts::MAX_SUBSTEPS;
use crate::sim::{GameEvent, GameState, Snapshot, TickInput, skip, tick_session};
use crate::tuning::Tuning;

/// User intent forwarded from the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Jump,
    Restart,
}

/// Owns the game state and pumps fixed ticks from wall-clock time
#[derive(Debug)]
pub struct Driver {
    state: GameState,
    pending: Vec<Command>,
    accumulator: Duration,
    last_frame: Option<Instant>,
    tick: Duration,
    /// Let the autopilot play
    pub idle_mode: bool,
}

impl Driver {
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self {
            state: GameState::new(tuning, seed),
            pending: Vec::new(),
            accumulator: Duration::ZERO,
            last_frame: None,
            tick: tuning.tick_duration(),
            idle_mode: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Queue a command for the next frame
    pub fn push(&mut self, command: Command) {
        self.pending.push(command);
    }

    /// Apply queued commands and run every tick that is due at `now`
    ///
    /// Returns the number of ticks simulated. At most `MAX_SUBSTEPS` run per
    /// frame; time beyond that is skipped without physics but still counts
    /// toward the inactivity timeout.
    pub fn frame(&mut self, now: Instant) -> u32 {
        let elapsed = match self.last_frame {
            Some(last) => now.saturating_duration_since(last),
            None => Duration::ZERO,
        };
        self.last_frame = Some(now);
        self.accumulator += elapsed;

        let session_before = self.state.session;
        for command in std::mem::take(&mut self.pending) {
            match command {
                Command::Start => {
                    self.state.start();
                }
                Command::Jump => {
                    self.state.jump();
                }
                Command::Restart => self.state.restart(),
            }
        }
        if self.state.session != session_before {
            // Time owed to the old session must not leak into the new one
            self.accumulator = Duration::ZERO;
        }

        let session = self.state.session;
        let input = TickInput {
            idle_mode: self.idle_mode,
            ..Default::default()
        };
        let mut steps = 0;
        while self.accumulator >= self.tick && steps < MAX_SUBSTEPS {
            if !tick_session(&mut self.state, session, &input) {
                break;
            }
            self.accumulator -= self.tick;
            steps += 1;
        }

        if self.accumulator >= self.tick {
            log::debug!(
                "Frame fell behind by {:?}; skipping excess ticks",
                self.accumulator
            );
            let remainder = Duration::from_nanos(
                (self.accumulator.as_nanos() % self.tick.as_nanos()) as u64,
            );
            // The inactivity timeout is wall-clock, so skipped ticks still count
            let dropped = self.accumulator - remainder;
            if self.state.session == session {
                skip(&mut self.state, dropped.as_secs_f64() * 1000.0);
            }
            self.accumulator = remainder;
        }

        steps
    }

    /// Time until the next tick is due, measured from the last frame
    pub fn until_next_tick(&self) -> Duration {
        self.tick.saturating_sub(self.accumulator)
    }

    /// Observable state, with the obstacle sampled at the current sub-tick time
    ///
    /// Collision always uses the tick-instant position; this only smooths
    /// rendering between ticks.
    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = self.state.snapshot();
        if self.state.is_running() {
            let ahead_ms = self.accumulator.as_secs_f32() * 1000.0;
            snapshot.obstacle_x = self.state.obstacle.x_ahead(&self.state.tuning, ahead_ms);
        }
        snapshot
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }
}
